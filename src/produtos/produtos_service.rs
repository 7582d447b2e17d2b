// src/produtos/produtos_service.rs
//
// Regras de negócio e acesso ao banco para produtos. As rotas ficam finas:
// validam nada além da desserialização e delegam para cá. As funções recebem
// o pool explicitamente para poderem ser chamadas fora do contexto HTTP.

use bigdecimal::{BigDecimal, Zero};
use sqlx::{query_as, PgPool};
use uuid::Uuid;

use super::produtos_structs::{AtualizaProduto, NovoProduto, Produto, CATEGORIAS_VALIDAS};
use crate::shared::shared_structs::ErroApi;

/// Regra de negócio: o preço de um produto deve ser maior que zero.
pub fn validar_preco(preco: &BigDecimal) -> Result<(), ErroApi> {
    if *preco <= BigDecimal::zero() {
        return Err(ErroApi::Validacao(
            "O preço deve ser maior que zero".to_string(),
        ));
    }
    Ok(())
}

/// Regra de negócio: a categoria deve pertencer ao conjunto fixo do cardápio.
pub fn validar_categoria(categoria: &str) -> Result<(), ErroApi> {
    if !CATEGORIAS_VALIDAS.contains(&categoria) {
        return Err(ErroApi::Validacao(format!(
            "Categoria inválida. Use: {}",
            CATEGORIAS_VALIDAS.join(", ")
        )));
    }
    Ok(())
}

/// Valida e insere um novo produto, devolvendo a linha criada.
pub async fn cadastrar_produto(pool: &PgPool, dados: NovoProduto) -> Result<Produto, ErroApi> {
    validar_preco(&dados.preco)?;
    validar_categoria(&dados.categoria)?;

    query_as::<_, Produto>(
        "INSERT INTO produtos (nome, preco, categoria, descricao, visivel)
         VALUES ($1, $2, $3, $4, COALESCE($5, true))
         RETURNING id, nome, preco, categoria, descricao, visivel",
    )
    .bind(&dados.nome)
    .bind(&dados.preco)
    .bind(&dados.categoria)
    .bind(&dados.descricao)
    .bind(dados.visivel)
    .fetch_one(pool)
    .await
    .map_err(|e| ErroApi::banco("Erro ao inserir produto", e))
}

/// Lista todos os produtos, os mais recentes primeiro.
pub async fn listar_produtos(pool: &PgPool) -> Result<Vec<Produto>, ErroApi> {
    query_as::<_, Produto>(
        "SELECT id, nome, preco, categoria, descricao, visivel
         FROM produtos
         ORDER BY criado_em DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ErroApi::banco("Erro ao buscar produtos", e))
}

/// Busca um produto pelo id; id inexistente vira `NaoEncontrado`.
pub async fn buscar_produto_por_id(pool: &PgPool, id: Uuid) -> Result<Produto, ErroApi> {
    query_as::<_, Produto>(
        "SELECT id, nome, preco, categoria, descricao, visivel
         FROM produtos
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ErroApi::banco("Erro ao buscar produto por id", e))?
    .ok_or_else(|| ErroApi::NaoEncontrado(format!("Produto com id {} não encontrado", id)))
}

/// Atualiza apenas os campos enviados. A existência é verificada antes do
/// UPDATE e cada campo presente passa pelas mesmas validações do cadastro.
pub async fn atualizar_produto(
    pool: &PgPool,
    id: Uuid,
    dados: AtualizaProduto,
) -> Result<Produto, ErroApi> {
    buscar_produto_por_id(pool, id).await?;

    if let Some(preco) = &dados.preco {
        validar_preco(preco)?;
    }
    if let Some(categoria) = &dados.categoria {
        validar_categoria(categoria)?;
    }

    query_as::<_, Produto>(
        "UPDATE produtos
         SET nome = COALESCE($2, nome),
             preco = COALESCE($3, preco),
             categoria = COALESCE($4, categoria),
             descricao = COALESCE($5, descricao),
             visivel = COALESCE($6, visivel),
             atualizado_em = NOW()
         WHERE id = $1
         RETURNING id, nome, preco, categoria, descricao, visivel",
    )
    .bind(id)
    .bind(dados.nome)
    .bind(dados.preco)
    .bind(dados.categoria)
    .bind(dados.descricao)
    .bind(dados.visivel)
    .fetch_one(pool)
    .await
    .map_err(|e| ErroApi::banco("Erro ao atualizar produto", e))
}

/// Exclui um produto. As promoções associadas caem junto pelo
/// ON DELETE CASCADE da chave estrangeira.
pub async fn deletar_produto(pool: &PgPool, id: Uuid) -> Result<(), ErroApi> {
    buscar_produto_por_id(pool, id).await?;

    sqlx::query("DELETE FROM produtos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| ErroApi::banco("Erro ao excluir produto", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn rejeita_preco_zero() {
        let erro = validar_preco(&BigDecimal::from(0)).unwrap_err();
        assert!(matches!(erro, ErroApi::Validacao(_)));
    }

    #[test]
    fn rejeita_preco_negativo() {
        let preco = BigDecimal::from_str("-5.50").unwrap();
        assert!(validar_preco(&preco).is_err());
    }

    #[test]
    fn aceita_preco_positivo() {
        let preco = BigDecimal::from_str("0.01").unwrap();
        assert!(validar_preco(&preco).is_ok());
    }

    #[test]
    fn aceita_todas_as_categorias_do_cardapio() {
        for categoria in CATEGORIAS_VALIDAS {
            assert!(validar_categoria(categoria).is_ok());
        }
    }

    #[test]
    fn rejeita_categoria_desconhecida() {
        let erro = validar_categoria("Lanches").unwrap_err();
        assert!(matches!(erro, ErroApi::Validacao(_)));
    }

    #[test]
    fn categoria_diferencia_maiusculas() {
        assert!(validar_categoria("bebidas").is_err());
    }
}
