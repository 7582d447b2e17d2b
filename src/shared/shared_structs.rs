// src/shared/shared_structs.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Estrutura genérica para padronizar as respostas da API.
/// 'T' é o tipo do corpo da resposta, que pode ser opcional.
#[derive(Serialize)]
pub struct GenericResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")] // Não serializa 'body' se for None
    pub body: Option<T>,
}

impl<T: Serialize> GenericResponse<T> {
    /// Resposta de sucesso com corpo.
    pub fn sucesso(message: impl Into<String>, body: T) -> Self {
        GenericResponse {
            status: "success".to_string(),
            message: message.into(),
            body: Some(body),
        }
    }
}

impl GenericResponse<()> {
    /// Resposta de sucesso sem corpo (ex: exclusões).
    pub fn sucesso_sem_corpo(message: impl Into<String>) -> Self {
        GenericResponse {
            status: "success".to_string(),
            message: message.into(),
            body: None,
        }
    }
}

/// Erros de negócio da API, convertidos em resposta HTTP pelo actix
/// via `ResponseError`. As rotas retornam `Result<HttpResponse, ErroApi>`
/// e propagam com `?`.
#[derive(Debug, Error)]
pub enum ErroApi {
    /// Entrada rejeitada pelas regras de negócio (preço, categoria, horário).
    #[error("{0}")]
    Validacao(String),

    /// Produto ou promoção inexistente para o id informado.
    #[error("{0}")]
    NaoEncontrado(String),

    /// Violação de chave estrangeira: promoção aponta para produto inexistente.
    #[error("{0}")]
    ProdutoInexistente(String),

    /// Falha no banco. O detalhe interno vai para o log, nunca para o cliente.
    #[error("Erro interno ao acessar o banco de dados")]
    Banco(#[source] sqlx::Error),
}

impl ErroApi {
    /// Registra o erro de banco no log com contexto e devolve a variante opaca.
    pub fn banco(contexto: &str, erro: sqlx::Error) -> Self {
        tracing::error!("{contexto}: {erro:?}");
        ErroApi::Banco(erro)
    }
}

impl ResponseError for ErroApi {
    fn status_code(&self) -> StatusCode {
        match self {
            ErroApi::Validacao(_) => StatusCode::BAD_REQUEST,
            ErroApi::NaoEncontrado(_) => StatusCode::NOT_FOUND,
            ErroApi::ProdutoInexistente(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ErroApi::Banco(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(GenericResponse::<()> {
            status: "error".to_string(),
            message: self.to_string(),
            body: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_http_por_tipo_de_erro() {
        let casos = [
            (ErroApi::Validacao("preço inválido".into()), 400),
            (ErroApi::NaoEncontrado("produto não encontrado".into()), 404),
            (ErroApi::ProdutoInexistente("produto não existe".into()), 422),
            (ErroApi::Banco(sqlx::Error::PoolClosed), 500),
        ];
        for (erro, esperado) in casos {
            assert_eq!(erro.status_code().as_u16(), esperado);
        }
    }

    #[test]
    fn erro_de_banco_nao_vaza_detalhe_interno() {
        let erro = ErroApi::Banco(sqlx::Error::PoolClosed);
        assert_eq!(erro.to_string(), "Erro interno ao acessar o banco de dados");
    }
}
