// src/produtos/produtos_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

// Importa as structs e o service definidos na mesma pasta `produtos`
use super::produtos_service;
use super::produtos_structs::{AtualizaProduto, NovoProduto};

use crate::shared::shared_structs::{ErroApi, GenericResponse};
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para buscar todos os produtos cadastrados.
#[get("/produtos")]
pub async fn buscar_produtos(data: web::Data<AppState>) -> Result<HttpResponse, ErroApi> {
    let produtos = produtos_service::listar_produtos(&data.db_pool).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Produtos listados com sucesso!",
        produtos,
    )))
}

/// Rota para buscar um produto por ID.
#[get("/produtos/{id}")]
pub async fn buscar_produto_por_id(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ErroApi> {
    let id = path.into_inner();
    let produto = produtos_service::buscar_produto_por_id(&data.db_pool, id).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("Produto com ID {} encontrado.", id),
        produto,
    )))
}

/// Rota para cadastrar um novo produto no cardápio.
#[post("/produtos")]
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    item: web::Json<NovoProduto>, // O corpo JSON é desserializado para NovoProduto
) -> Result<HttpResponse, ErroApi> {
    let produto = produtos_service::cadastrar_produto(&data.db_pool, item.into_inner()).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Produto cadastrado com sucesso!",
        produto,
    )))
}

/// Rota para atualizar um produto existente (campos parciais).
#[put("/produtos/{id}")]
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    item: web::Json<AtualizaProduto>,
) -> Result<HttpResponse, ErroApi> {
    let id = path.into_inner();
    let produto =
        produtos_service::atualizar_produto(&data.db_pool, id, item.into_inner()).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Produto atualizado com sucesso!",
        produto,
    )))
}

/// Rota para excluir um produto (e, em cascata, suas promoções).
#[delete("/produtos/{id}")]
pub async fn deletar_produto(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ErroApi> {
    let id = path.into_inner();
    produtos_service::deletar_produto(&data.db_pool, id).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso_sem_corpo(format!(
        "Produto com ID {} excluído com sucesso.",
        id
    ))))
}
