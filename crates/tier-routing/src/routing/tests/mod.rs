mod analyzers;
mod common;
mod routing;
mod store;
mod validation;
