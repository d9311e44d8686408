pub mod geotriage_core;
