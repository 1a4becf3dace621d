pub mod france;
pub mod gateways;
pub mod geo_validate;
pub mod normalize;
pub mod parse;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use carnet_entities::{geo::*, record::*};
}

pub mod prelude {
    pub use crate::{entities::*, gateways::*, repositories::AddressRepo};
}
