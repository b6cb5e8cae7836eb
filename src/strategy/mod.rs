pub mod ignore;
pub mod panic;
pub mod runner;
