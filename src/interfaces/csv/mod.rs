pub mod violation_writer;
