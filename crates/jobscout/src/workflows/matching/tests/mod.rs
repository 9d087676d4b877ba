mod common;

mod fetch;
mod intent;
mod quality;
mod queries;
