pub mod csv;
pub mod io;
