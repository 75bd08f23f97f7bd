// Host surface: the command-line front end

pub mod app;
