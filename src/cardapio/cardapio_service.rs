// src/cardapio/cardapio_service.rs
//
// Montagem do cardápio ativo. A parte com lógica de verdade é pura:
// `promocao_ativa` e `resolver_item` recebem o instante "agora" como
// parâmetro explícito e nunca leem o relógio, então são testáveis sem banco
// e sem depender da hora da máquina. A rota captura "agora" uma única vez
// por requisição, de modo que todos os itens da resposta refletem o mesmo
// instante.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};
use sqlx::{query_as, PgPool};
use std::collections::BTreeMap;

use super::cardapio_structs::{GrupoCardapio, ItemCardapio, LinhaCardapio};
use crate::shared::shared_structs::ErroApi;

// Nome completo em inglês, na mesma grafia usada em `dias_semana`.
fn nome_dia_semana(dia: Weekday) -> &'static str {
    match dia {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

// Minuto do dia, truncando segundos. Comparar inteiros evita as armadilhas
// da comparação lexicográfica de "HH:MM".
fn minuto_do_dia(horario: NaiveTime) -> u32 {
    horario.hour() * 60 + horario.minute()
}

/// Decide se uma promoção está ativa no instante `agora`: o dia atual deve
/// pertencer ao conjunto de dias e o horário atual deve cair no intervalo
/// semiaberto [início, fim).
pub fn promocao_ativa(
    dias: &[String],
    inicio: NaiveTime,
    fim: NaiveTime,
    agora: NaiveDateTime,
) -> bool {
    let dia_atual = nome_dia_semana(agora.weekday());
    if !dias.iter().any(|d| d == dia_atual) {
        return false;
    }
    let minuto_atual = minuto_do_dia(agora.time());
    minuto_do_dia(inicio) <= minuto_atual && minuto_atual < minuto_do_dia(fim)
}

/// Resolve o preço de exibição de uma linha do JOIN: com promoção ativa o
/// item sai com o preço promocional e os campos da promoção; caso contrário
/// sai com o preço normal e sem campos de promoção.
pub fn resolver_item(linha: LinhaCardapio, agora: NaiveDateTime) -> ItemCardapio {
    let ativa = match (&linha.dias_semana, linha.horario_inicio, linha.horario_fim) {
        (Some(dias), Some(inicio), Some(fim)) => promocao_ativa(dias, inicio, fim, agora),
        _ => false, // Sem promoção candidata
    };

    if ativa {
        if let Some(preco_promocional) = linha.preco_promocional {
            return ItemCardapio {
                id: linha.id,
                nome: linha.nome,
                descricao: linha.descricao,
                categoria: linha.categoria,
                preco: preco_promocional.clone(),
                promocao_ativa: true,
                preco_promocional: Some(preco_promocional),
                descricao_promocao: linha.descricao_promocao,
            };
        }
    }

    ItemCardapio {
        id: linha.id,
        nome: linha.nome,
        descricao: linha.descricao,
        categoria: linha.categoria,
        preco: linha.preco,
        promocao_ativa: false,
        preco_promocional: None,
        descricao_promocao: None,
    }
}

/// Agrupa os itens resolvidos por categoria e devolve os grupos em ordem
/// crescente de categoria. Dentro de cada grupo a ordem das linhas de
/// origem é preservada.
pub fn montar_cardapio(linhas: Vec<LinhaCardapio>, agora: NaiveDateTime) -> Vec<GrupoCardapio> {
    // BTreeMap dá o agrupamento e a ordenação das categorias de uma vez
    let mut grupos: BTreeMap<String, Vec<ItemCardapio>> = BTreeMap::new();
    for linha in linhas {
        let item = resolver_item(linha, agora);
        grupos.entry(item.categoria.clone()).or_default().push(item);
    }
    grupos
        .into_iter()
        .map(|(categoria, itens)| GrupoCardapio { categoria, itens })
        .collect()
}

/// Busca os produtos visíveis com no máximo uma promoção candidata cada
/// (DISTINCT ON) e monta o cardápio para o instante `agora`.
pub async fn buscar_cardapio(
    pool: &PgPool,
    agora: NaiveDateTime,
) -> Result<Vec<GrupoCardapio>, ErroApi> {
    let linhas = query_as::<_, LinhaCardapio>(
        "SELECT DISTINCT ON (p.id)
            p.id,
            p.nome,
            p.descricao,
            p.preco,
            p.categoria,
            pr.preco_promocional,
            pr.dias_semana,
            pr.horario_inicio,
            pr.horario_fim,
            pr.descricao AS descricao_promocao
         FROM produtos p
         LEFT JOIN promocoes pr ON pr.produto_id = p.id
         WHERE p.visivel = true
         ORDER BY p.id",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ErroApi::banco("Erro ao buscar o cardápio", e))?;

    Ok(montar_cardapio(linhas, agora))
}
