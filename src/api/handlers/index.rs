use axum::Json;
use serde_json::{json, Value};

use crate::api::middleware::auth::MaybeUser;

/// Landing page: reports whether the caller is signed in.
pub async fn index(MaybeUser(claims): MaybeUser) -> Json<Value> {
    match claims {
        Some(c) => Json(json!({
            "app": "SupportPortal",
            "authenticated": true,
            "user": {
                "id": c.sub,
                "username": c.username,
                "role": c.role,
            },
            "links": ["/dashboard", "/submit", "/logout"],
        })),
        None => Json(json!({
            "app": "SupportPortal",
            "authenticated": false,
            "user": null,
            "links": ["/login", "/register"],
        })),
    }
}
