// src/cardapio/cardapio_structs.rs

use bigdecimal::BigDecimal;
use chrono::NaiveTime;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Linha crua do JOIN produto + promoção. Os campos de promoção são opcionais:
/// ou todos presentes (o produto tem uma promoção candidata) ou todos ausentes.
#[derive(FromRow, Clone)]
pub struct LinhaCardapio {
    pub id: Uuid,
    pub nome: String,
    pub descricao: String,
    pub preco: BigDecimal,
    pub categoria: String,
    pub preco_promocional: Option<BigDecimal>,
    pub dias_semana: Option<Vec<String>>,
    pub horario_inicio: Option<NaiveTime>,
    pub horario_fim: Option<NaiveTime>,
    pub descricao_promocao: Option<String>,
}

/// Item do cardápio com o preço já resolvido para o instante da consulta.
/// Derivado a cada requisição, nunca persistido.
#[derive(Serialize, Debug, PartialEq)]
pub struct ItemCardapio {
    pub id: Uuid,
    pub nome: String,
    pub descricao: String,
    pub categoria: String,
    /// Preço exibido: o promocional quando a promoção está ativa,
    /// senão o preço normal do produto.
    pub preco: BigDecimal,
    pub promocao_ativa: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preco_promocional: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao_promocao: Option<String>,
}

/// Uma categoria do cardápio com seus itens, na ordem em que vieram do banco
#[derive(Serialize, Debug, PartialEq)]
pub struct GrupoCardapio {
    pub categoria: String,
    pub itens: Vec<ItemCardapio>,
}
