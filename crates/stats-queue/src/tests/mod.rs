//! Test suites for the queue crate.


mod drain;
mod fanout;
