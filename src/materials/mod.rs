//! Material records and the unimorph laminate stack

pub mod elastic;
pub mod piezo;
pub mod stack;

pub use elastic::ElasticMaterial;
pub use piezo::PiezoMaterial;
pub use stack::Stack;
