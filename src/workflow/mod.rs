//! Orquestación: etapas por imagen (`pipeline`), recorrido de todas las
//! imágenes descubiertas (`driver`) y estados de avance (`stage`).
pub mod driver;
pub mod pipeline;
pub mod stage;
