// src/produtos/mod.rs

// Declara o submódulo que contém as definições das structs de produtos
pub mod produtos_structs;
// Declara o submódulo com as regras de negócio e o acesso ao banco
pub mod produtos_service;
// Declara o submódulo que contém as funções de rota relacionadas a produtos
pub mod produtos_router;
