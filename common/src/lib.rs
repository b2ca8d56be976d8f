pub mod application;
pub mod colors;
pub mod config;
pub mod context;
pub mod debug;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod maths;
pub mod run;
pub mod shader;
