pub mod cantor_dust;
pub mod cantor_line;
pub mod errors;
pub mod fractal_kinds;
