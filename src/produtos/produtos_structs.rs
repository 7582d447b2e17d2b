// src/produtos/produtos_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categorias aceitas para um produto do cardápio.
pub const CATEGORIAS_VALIDAS: [&str; 4] =
    ["Entradas", "Pratos Principais", "Bebidas", "Sobremesas"];

/// Estrutura para receber os dados do novo produto na requisição POST
#[derive(Deserialize)]
pub struct NovoProduto {
    pub nome: String,
    pub preco: BigDecimal,
    pub categoria: String,
    pub descricao: String,
    pub visivel: Option<bool>, // Ausente = true
}

/// Estrutura para o PUT: apenas os campos enviados são alterados
#[derive(Deserialize)]
pub struct AtualizaProduto {
    pub nome: Option<String>,
    pub preco: Option<BigDecimal>,
    pub categoria: Option<String>,
    pub descricao: Option<String>,
    pub visivel: Option<bool>,
}

/// Estrutura que representa um produto no banco de dados.
/// Deriva FromRow para mapeamento direto de resultados de query SQL.
#[derive(Serialize, FromRow)]
pub struct Produto {
    pub id: Uuid,
    pub nome: String,
    pub preco: BigDecimal,
    pub categoria: String,
    pub descricao: String,
    pub visivel: bool,
}
