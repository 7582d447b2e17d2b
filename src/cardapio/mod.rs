// src/cardapio/mod.rs

// Declara o submódulo com as structs derivadas do cardápio
pub mod cardapio_structs;
// Declara o submódulo com a montagem do cardápio (avaliação de promoções)
pub mod cardapio_service;
// Declara o submódulo que contém a rota do cardápio
pub mod cardapio_router;
