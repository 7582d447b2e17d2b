// src/promocoes/promocoes_structs.rs

use bigdecimal::BigDecimal;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Nomes de dia aceitos em `dias_semana`. O banco e o avaliador de horário
/// usam os nomes completos em inglês, na mesma grafia.
pub const DIAS_VALIDOS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Estrutura para receber os dados da nova promoção na requisição POST.
/// Os horários chegam como "HH:MM" e são convertidos para `NaiveTime`
/// depois da validação de granularidade.
#[derive(Deserialize)]
pub struct NovaPromocao {
    pub produto_id: Uuid,
    pub descricao: String,
    pub preco_promocional: BigDecimal,
    pub dias_semana: Vec<String>,
    pub horario_inicio: String,
    pub horario_fim: String,
}

/// Estrutura para o PUT: apenas os campos enviados são validados e alterados
#[derive(Deserialize)]
pub struct AtualizaPromocao {
    pub descricao: Option<String>,
    pub preco_promocional: Option<BigDecimal>,
    pub dias_semana: Option<Vec<String>>,
    pub horario_inicio: Option<String>,
    pub horario_fim: Option<String>,
}

/// Estrutura que representa uma promoção no banco de dados
#[derive(Serialize, FromRow)]
pub struct Promocao {
    pub id: Uuid,
    pub produto_id: Uuid,
    pub descricao: String,
    pub preco_promocional: BigDecimal,
    pub dias_semana: Vec<String>,
    pub horario_inicio: NaiveTime,
    pub horario_fim: NaiveTime,
}
