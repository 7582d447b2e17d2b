// src/promocoes/promocoes_service.rs
//
// Regras de negócio e acesso ao banco para promoções. A regra central é a
// granularidade de 15 minutos: todo horário de início e fim precisa cair em
// :00, :15, :30 ou :45.

use bigdecimal::{BigDecimal, Zero};
use chrono::{NaiveTime, Timelike};
use sqlx::{query_as, PgPool};
use uuid::Uuid;

use super::promocoes_structs::{AtualizaPromocao, NovaPromocao, Promocao, DIAS_VALIDOS};
use crate::shared::shared_structs::ErroApi;

// Código Postgres para violação de chave estrangeira.
const FK_VIOLATION: &str = "23503";

/// Valida um horário "HH:MM" com minuto em {0, 15, 30, 45} e o converte
/// para `NaiveTime`. O formato exige zero à esquerda ("08:15", nunca "8:15").
pub fn validar_horario(horario: &str) -> Result<NaiveTime, ErroApi> {
    let quantizado = horario.len() == 5 && {
        match NaiveTime::parse_from_str(horario, "%H:%M") {
            Ok(t) => matches!(t.minute(), 0 | 15 | 30 | 45),
            Err(_) => false,
        }
    };
    if !quantizado {
        return Err(ErroApi::Validacao(
            "Horários devem estar em intervalos de 15 minutos (ex: 18:00, 18:15, 18:30)"
                .to_string(),
        ));
    }
    // len e minuto já conferidos acima; o parse não falha mais aqui
    NaiveTime::parse_from_str(horario, "%H:%M")
        .map_err(|_| ErroApi::Validacao("Horário inválido".to_string()))
}

/// Regra de negócio: o preço promocional deve ser maior que zero.
pub fn validar_preco_promocional(preco: &BigDecimal) -> Result<(), ErroApi> {
    if *preco <= BigDecimal::zero() {
        return Err(ErroApi::Validacao(
            "O preço promocional deve ser maior que zero".to_string(),
        ));
    }
    Ok(())
}

/// Regra de negócio: o conjunto de dias não pode ser vazio e cada nome deve
/// ser um dia da semana completo em inglês.
pub fn validar_dias(dias: &[String]) -> Result<(), ErroApi> {
    if dias.is_empty() {
        return Err(ErroApi::Validacao(
            "Informe ao menos um dia da semana para a promoção".to_string(),
        ));
    }
    for dia in dias {
        if !DIAS_VALIDOS.contains(&dia.as_str()) {
            return Err(ErroApi::Validacao(format!(
                "Dia da semana inválido: '{}'. Use: {}",
                dia,
                DIAS_VALIDOS.join(", ")
            )));
        }
    }
    Ok(())
}

/// Regra de negócio: a janela não pode cruzar a meia-noite. O teste de
/// ativação compara horários dentro de um mesmo dia, então início >= fim é
/// uma configuração sem efeito e é rejeitada aqui.
pub fn validar_janela(inicio: NaiveTime, fim: NaiveTime) -> Result<(), ErroApi> {
    if inicio >= fim {
        return Err(ErroApi::Validacao(
            "O horário de início deve ser anterior ao de fim; janelas que cruzam a meia-noite não são suportadas"
                .to_string(),
        ));
    }
    Ok(())
}

// Traduz violação de FK (produto_id inexistente) para o erro específico;
// qualquer outra falha de banco vira o erro opaco logado.
fn mapear_erro_insercao(erro: sqlx::Error) -> ErroApi {
    let eh_fk = erro
        .as_database_error()
        .and_then(|db| db.code())
        .map(|codigo| codigo == FK_VIOLATION)
        .unwrap_or(false);
    if eh_fk {
        ErroApi::ProdutoInexistente(
            "Produto não encontrado. Não é possível criar promoção.".to_string(),
        )
    } else {
        ErroApi::banco("Erro ao inserir promoção", erro)
    }
}

/// Valida e insere uma nova promoção, devolvendo a linha criada.
pub async fn cadastrar_promocao(pool: &PgPool, dados: NovaPromocao) -> Result<Promocao, ErroApi> {
    let inicio = validar_horario(&dados.horario_inicio)?;
    let fim = validar_horario(&dados.horario_fim)?;
    validar_janela(inicio, fim)?;
    validar_preco_promocional(&dados.preco_promocional)?;
    validar_dias(&dados.dias_semana)?;

    query_as::<_, Promocao>(
        "INSERT INTO promocoes (produto_id, descricao, preco_promocional, dias_semana, horario_inicio, horario_fim)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, produto_id, descricao, preco_promocional, dias_semana, horario_inicio, horario_fim",
    )
    .bind(dados.produto_id)
    .bind(&dados.descricao)
    .bind(&dados.preco_promocional)
    .bind(&dados.dias_semana)
    .bind(inicio)
    .bind(fim)
    .fetch_one(pool)
    .await
    .map_err(mapear_erro_insercao)
}

/// Lista todas as promoções, as mais recentes primeiro.
pub async fn listar_promocoes(pool: &PgPool) -> Result<Vec<Promocao>, ErroApi> {
    query_as::<_, Promocao>(
        "SELECT id, produto_id, descricao, preco_promocional, dias_semana, horario_inicio, horario_fim
         FROM promocoes
         ORDER BY criado_em DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ErroApi::banco("Erro ao buscar promoções", e))
}

/// Busca uma promoção pelo id; id inexistente vira `NaoEncontrado`.
pub async fn buscar_promocao_por_id(pool: &PgPool, id: Uuid) -> Result<Promocao, ErroApi> {
    query_as::<_, Promocao>(
        "SELECT id, produto_id, descricao, preco_promocional, dias_semana, horario_inicio, horario_fim
         FROM promocoes
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ErroApi::banco("Erro ao buscar promoção por id", e))?
    .ok_or_else(|| ErroApi::NaoEncontrado(format!("Promoção com id {} não encontrada", id)))
}

/// Atualiza apenas os campos enviados. A janela resultante (campo novo
/// combinado com o que já está salvo) também precisa ser válida.
pub async fn atualizar_promocao(
    pool: &PgPool,
    id: Uuid,
    dados: AtualizaPromocao,
) -> Result<Promocao, ErroApi> {
    let atual = buscar_promocao_por_id(pool, id).await?;

    let inicio = match &dados.horario_inicio {
        Some(horario) => Some(validar_horario(horario)?),
        None => None,
    };
    let fim = match &dados.horario_fim {
        Some(horario) => Some(validar_horario(horario)?),
        None => None,
    };
    validar_janela(
        inicio.unwrap_or(atual.horario_inicio),
        fim.unwrap_or(atual.horario_fim),
    )?;
    if let Some(preco) = &dados.preco_promocional {
        validar_preco_promocional(preco)?;
    }
    if let Some(dias) = &dados.dias_semana {
        validar_dias(dias)?;
    }

    query_as::<_, Promocao>(
        "UPDATE promocoes
         SET descricao = COALESCE($2, descricao),
             preco_promocional = COALESCE($3, preco_promocional),
             dias_semana = COALESCE($4, dias_semana),
             horario_inicio = COALESCE($5, horario_inicio),
             horario_fim = COALESCE($6, horario_fim),
             atualizado_em = NOW()
         WHERE id = $1
         RETURNING id, produto_id, descricao, preco_promocional, dias_semana, horario_inicio, horario_fim",
    )
    .bind(id)
    .bind(dados.descricao)
    .bind(dados.preco_promocional)
    .bind(dados.dias_semana)
    .bind(inicio)
    .bind(fim)
    .fetch_one(pool)
    .await
    .map_err(|e| ErroApi::banco("Erro ao atualizar promoção", e))
}

/// Exclui uma promoção.
pub async fn deletar_promocao(pool: &PgPool, id: Uuid) -> Result<(), ErroApi> {
    buscar_promocao_por_id(pool, id).await?;

    sqlx::query("DELETE FROM promocoes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| ErroApi::banco("Erro ao excluir promoção", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn aceita_horarios_quantizados() {
        for horario in ["00:00", "08:15", "12:30", "18:45", "23:45"] {
            assert!(validar_horario(horario).is_ok(), "rejeitou {horario}");
        }
    }

    #[test]
    fn rejeita_minuto_fora_da_grade() {
        let erro = validar_horario("18:05").unwrap_err();
        assert!(matches!(erro, ErroApi::Validacao(_)));
        assert!(validar_horario("18:01").is_err());
        assert!(validar_horario("18:59").is_err());
    }

    #[test]
    fn rejeita_formato_invalido() {
        // Exige exatamente "HH:MM", com zero à esquerda
        for horario in ["8:15", "18:15:00", "1815", "24:00", "18h15", ""] {
            assert!(validar_horario(horario).is_err(), "aceitou {horario}");
        }
    }

    #[test]
    fn conversao_preserva_hora_e_minuto() {
        let t = validar_horario("18:30").unwrap();
        assert_eq!((t.hour(), t.minute()), (18, 30));
    }

    #[test]
    fn rejeita_preco_promocional_nao_positivo() {
        assert!(validar_preco_promocional(&BigDecimal::from(0)).is_err());
        let negativo = BigDecimal::from_str("-1.00").unwrap();
        assert!(validar_preco_promocional(&negativo).is_err());
        let positivo = BigDecimal::from_str("8.00").unwrap();
        assert!(validar_preco_promocional(&positivo).is_ok());
    }

    #[test]
    fn rejeita_conjunto_de_dias_vazio() {
        assert!(validar_dias(&[]).is_err());
    }

    #[test]
    fn rejeita_dia_desconhecido() {
        let dias = vec!["Monday".to_string(), "Funday".to_string()];
        assert!(validar_dias(&dias).is_err());
    }

    #[test]
    fn aceita_todos_os_dias_validos() {
        let dias: Vec<String> = DIAS_VALIDOS.iter().map(|d| d.to_string()).collect();
        assert!(validar_dias(&dias).is_ok());
    }

    #[test]
    fn rejeita_janela_que_cruza_a_meia_noite() {
        let inicio = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        let fim = NaiveTime::from_hms_opt(2, 0, 0).unwrap();
        assert!(validar_janela(inicio, fim).is_err());
    }

    #[test]
    fn rejeita_janela_vazia() {
        let t = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        assert!(validar_janela(t, t).is_err());
    }

    #[test]
    fn aceita_janela_no_mesmo_dia() {
        let inicio = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let fim = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        assert!(validar_janela(inicio, fim).is_ok());
    }
}
