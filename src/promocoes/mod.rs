// src/promocoes/mod.rs

// Declara o submódulo que contém as definições das structs de promoções
pub mod promocoes_structs;
// Declara o submódulo com as regras de negócio e o acesso ao banco
pub mod promocoes_service;
// Declara o submódulo que contém as funções de rota relacionadas a promoções
pub mod promocoes_router;
