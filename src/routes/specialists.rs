use crate::core::DiscoveryPipeline;
use crate::models::{
    CatalogResponse, DiscoverRequest, DiscoverResponse, ErrorResponse, Favorite, HealthResponse,
    RemoveFavoriteResponse, SaveFavoriteRequest, SaveFavoriteResponse, Specialist,
};
use crate::services::{CacheKey, CacheManager, PostgresClient, SupabaseClient};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub cache: Arc<CacheManager>,
    pub postgres: Arc<PostgresClient>,
    pub pipeline: DiscoveryPipeline,
}

/// Configure all specialist-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/specialists/discover", web::post().to(discover_specialists))
        .route("/specialists/refresh", web::post().to(refresh_roster))
        .route("/catalog", web::get().to(get_catalog))
        .route("/favorites", web::post().to(save_favorite))
        .route("/favorites", web::delete().to(remove_favorite))
        .route("/favorites", web::get().to(get_favorites));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Check PostgreSQL and the record store
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);
    let store_healthy = state.supabase.health_check().await.unwrap_or(false);

    let status = if pg_healthy && store_healthy {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Discover specialists endpoint
///
/// POST /api/v1/specialists/discover
///
/// Request body:
/// ```json
/// {
///   "city": "Mumbai",
///   "specialty": "all",
///   "query": "rao",
///   "location": { "latitude": 19.0760, "longitude": 72.8777 }
/// }
/// ```
///
/// Every field is optional; an empty body returns the whole roster.
async fn discover_specialists(
    state: web::Data<AppState>,
    req: web::Json<DiscoverRequest>,
) -> impl Responder {
    // Resolve the request against the catalog ("all" and absent both mean
    // no constraint; unknown values are rejected here, before any fetch)
    let criteria = match req.criteria(state.pipeline.catalog()) {
        Ok(criteria) => criteria,
        Err(e) => {
            tracing::info!("Rejected discover request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid filter value".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    tracing::info!(
        "Discovering specialists: city={:?}, specialty={:?}, query={:?}",
        criteria.city,
        criteria.specialty,
        criteria.text_query
    );

    // Fetch the roster, cache-aside
    let roster_key = CacheKey::roster();
    let roster: Vec<Specialist> = match state.cache.get(&roster_key).await {
        Ok(roster) => {
            tracing::debug!("Using cached specialist roster");
            roster
        }
        Err(_) => {
            let roster = match state.supabase.fetch_specialists().await {
                Ok(roster) => roster,
                Err(e) => {
                    tracing::error!("Failed to fetch specialists: {}", e);
                    return HttpResponse::InternalServerError().json(ErrorResponse {
                        error: "Failed to fetch specialists".to_string(),
                        message: e.to_string(),
                        status_code: 500,
                    });
                }
            };

            if let Err(e) = state.cache.set(&roster_key, &roster).await {
                tracing::warn!("Failed to cache specialist roster: {}", e);
            }

            roster
        }
    };

    // Run the discovery pipeline
    let result = state.pipeline.discover(roster, &criteria);

    tracing::info!(
        "Returning {} specialists (from {} candidates)",
        result.specialists.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(DiscoverResponse {
        specialists: result.specialists,
        total_results: result.total_candidates,
    })
}

/// Force a roster re-fetch on the next discover request
///
/// POST /api/v1/specialists/refresh
async fn refresh_roster(state: web::Data<AppState>) -> impl Responder {
    match state.cache.delete(&CacheKey::roster()).await {
        Ok(()) => {
            tracing::info!("Specialist roster cache cleared");
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Specialist roster cache cleared",
            }))
        }
        Err(e) => {
            tracing::error!("Failed to clear roster cache: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to clear roster cache".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Get the cities and specialties the service accepts as filter values
///
/// GET /api/v1/catalog
async fn get_catalog(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.pipeline.catalog();

    HttpResponse::Ok().json(CatalogResponse {
        cities: catalog.cities.clone(),
        specialties: catalog.specialties.clone(),
    })
}

/// Save a specialist as a favorite
///
/// POST /api/v1/favorites
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "specialistId": "string"
/// }
/// ```
async fn save_favorite(
    state: web::Data<AppState>,
    req: web::Json<SaveFavoriteRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .postgres
        .save_favorite(&req.user_id, &req.specialist_id)
        .await
    {
        Ok(id) => {
            // Invalidate the cached favorites list for this user
            let cache_key = CacheKey::favorites(&req.user_id);
            if let Err(e) = state.cache.delete(&cache_key).await {
                tracing::warn!("Failed to invalidate favorites cache: {}", e);
            }

            HttpResponse::Ok().json(SaveFavoriteResponse {
                success: true,
                favorite_id: id.to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to save favorite: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save favorite".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Remove a saved favorite
///
/// DELETE /api/v1/favorites?userId={userId}&specialistId={specialistId}
async fn remove_favorite(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let user_id = match query.get("userId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing userId parameter".to_string(),
                message: "userId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    let specialist_id = match query.get("specialistId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing specialistId parameter".to_string(),
                message: "specialistId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    match state.postgres.remove_favorite(user_id, specialist_id).await {
        Ok(removed) => {
            let cache_key = CacheKey::favorites(user_id);
            if let Err(e) = state.cache.delete(&cache_key).await {
                tracing::warn!("Failed to invalidate favorites cache: {}", e);
            }

            HttpResponse::Ok().json(RemoveFavoriteResponse {
                success: true,
                removed,
            })
        }
        Err(e) => {
            tracing::error!("Failed to remove favorite: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to remove favorite".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Get all favorites saved by a user
///
/// GET /api/v1/favorites?userId={userId}
async fn get_favorites(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let user_id = match query.get("userId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing userId parameter".to_string(),
                message: "userId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    // Favorites are cached per user and invalidated on every write
    let cache_key = CacheKey::favorites(user_id);
    if let Ok(favorites) = state.cache.get::<Vec<Favorite>>(&cache_key).await {
        return HttpResponse::Ok().json(serde_json::json!({
            "userId": user_id,
            "favorites": favorites,
            "count": favorites.len(),
        }));
    }

    match state.postgres.get_favorites(user_id).await {
        Ok(favorites) => {
            if let Err(e) = state.cache.set(&cache_key, &favorites).await {
                tracing::warn!("Failed to cache favorites: {}", e);
            }

            HttpResponse::Ok().json(serde_json::json!({
                "userId": user_id,
                "favorites": favorites,
                "count": favorites.len(),
            }))
        }
        Err(e) => {
            tracing::error!("Failed to fetch favorites for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch favorites".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
