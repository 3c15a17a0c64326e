pub mod asignatura;

pub use asignatura::Asignatura;
