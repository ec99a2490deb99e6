// Interface adapters: wire protocol, game API clients and the debug viewer.

pub mod clients;
pub mod protocol;
pub mod render;
