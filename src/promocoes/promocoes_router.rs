// src/promocoes/promocoes_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

// Importa as structs e o service definidos na mesma pasta `promocoes`
use super::promocoes_service;
use super::promocoes_structs::{AtualizaPromocao, NovaPromocao};

use crate::shared::shared_structs::{ErroApi, GenericResponse};
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para buscar todas as promoções cadastradas.
#[get("/promocoes")]
pub async fn buscar_promocoes(data: web::Data<AppState>) -> Result<HttpResponse, ErroApi> {
    let promocoes = promocoes_service::listar_promocoes(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Promoções listadas com sucesso!",
        promocoes,
    )))
}

/// Rota para buscar uma promoção por ID.
#[get("/promocoes/{id}")]
pub async fn buscar_promocao_por_id(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ErroApi> {
    let id = path.into_inner();
    let promocao = promocoes_service::buscar_promocao_por_id(&data.db_pool, id).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("Promoção com ID {} encontrada.", id),
        promocao,
    )))
}

/// Rota para cadastrar uma nova promoção vinculada a um produto.
#[post("/promocoes")]
pub async fn cadastrar_promocao(
    data: web::Data<AppState>,
    item: web::Json<NovaPromocao>,
) -> Result<HttpResponse, ErroApi> {
    let promocao =
        promocoes_service::cadastrar_promocao(&data.db_pool, item.into_inner()).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Promoção cadastrada com sucesso!",
        promocao,
    )))
}

/// Rota para atualizar uma promoção existente (campos parciais).
#[put("/promocoes/{id}")]
pub async fn atualizar_promocao(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    item: web::Json<AtualizaPromocao>,
) -> Result<HttpResponse, ErroApi> {
    let id = path.into_inner();
    let promocao =
        promocoes_service::atualizar_promocao(&data.db_pool, id, item.into_inner()).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Promoção atualizada com sucesso!",
        promocao,
    )))
}

/// Rota para excluir uma promoção.
#[delete("/promocoes/{id}")]
pub async fn deletar_promocao(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ErroApi> {
    let id = path.into_inner();
    promocoes_service::deletar_promocao(&data.db_pool, id).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso_sem_corpo(format!(
        "Promoção com ID {} excluída com sucesso.",
        id
    ))))
}
