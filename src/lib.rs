//! Sincroniza textos localizados de um serviço remoto de tradução para
//! arquivos de recurso por idioma e por aplicação, consumidos pelo host
//! na inicialização.

pub mod config;
pub mod error;
pub mod model;
pub mod services;
