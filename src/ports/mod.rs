mod build_driver;

pub use build_driver::BuildDriver;
