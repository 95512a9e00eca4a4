pub mod analyzers;
pub mod calendar;
pub mod city;
pub mod filter;
pub mod loader;
pub mod output;
pub mod prompt;
pub mod record;
pub mod report;
pub mod session;
