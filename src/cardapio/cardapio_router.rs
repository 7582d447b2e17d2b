// src/cardapio/cardapio_router.rs

use actix_web::{get, web, HttpResponse};
use chrono::Local;

use super::cardapio_service;
use crate::shared::shared_structs::ErroApi;
use crate::AppState;

/// Rota pública do cardápio ativo: produtos visíveis agrupados por categoria,
/// com o preço promocional aplicado quando a promoção vale neste instante.
#[get("/cardapio")]
pub async fn buscar_cardapio(data: web::Data<AppState>) -> Result<HttpResponse, ErroApi> {
    // "agora" é capturado uma única vez: todos os itens da resposta
    // refletem o mesmo instante
    let agora = Local::now().naive_local();
    let grupos = cardapio_service::buscar_cardapio(&data.db_pool, agora).await?;
    Ok(HttpResponse::Ok().json(grupos))
}
