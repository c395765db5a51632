use actix_web::{web, HttpResponse};
use serde_json::json;

use ks_infra::DatabasePool;

/// Handler for GET /health
///
/// With a MySQL credential store the pool is checked; an unreachable
/// database answers 503.
pub async fn health_check(database: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let (healthy, store) = match database {
        Some(pool) => {
            let health = pool.health().await;
            let store = json!({
                "kind": "mysql",
                "status": if health.reachable { "up" } else { "down" },
                "connections": health.statistics.connections,
                "idle_connections": health.statistics.idle_connections,
                "max_connections": health.statistics.max_connections,
            });
            (health.reachable, store)
        }
        None => (true, json!({ "kind": "memory", "status": "up" })),
    };

    let body = json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "service": "keystone-api",
        "version": env!("CARGO_PKG_VERSION"),
        "credential_store": store,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        log::warn!("Health check failed: credential store unreachable");
        HttpResponse::ServiceUnavailable().json(body)
    }
}
