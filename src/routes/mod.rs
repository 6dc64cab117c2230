use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::types::app_state::AppState;

mod delete_bus_route;
mod get_auth_session;
mod get_bus_route;
mod get_dashboard_routes;
mod get_stop;
mod get_stops;
mod get_stops_between;
mod post_add_bus_route;
mod post_auth_signin;
mod post_auth_signout;
mod post_auth_signup;
mod post_update_bus_route;

fn transit_routes() -> Router<AppState> {
    Router::new()
        .route("/stops", get(get_stops::get_stops))
        .route("/stops/:stop_id", get(get_stop::get_stop))
        .route(
            "/stops-between",
            get(get_stops_between::get_stops_between),
        )
}

fn bus_route_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/add-bus-route",
            post(post_add_bus_route::post_add_bus_route),
        )
        .route(
            "/update-bus-route/:id",
            get(get_bus_route::get_bus_route)
                .post(post_update_bus_route::post_update_bus_route),
        )
        .route(
            "/delete-bus-route/:id",
            delete(delete_bus_route::delete_bus_route),
        )
}

fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/routes", get(get_dashboard_routes::get_dashboard_routes))
        .route("/routes/", get(get_dashboard_routes::get_dashboard_routes))
        .route(
            "/routes/:route_id",
            get(get_dashboard_routes::get_dashboard_route),
        )
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/supabase/auth/signup",
            post(post_auth_signup::post_auth_signup),
        )
        .route(
            "/supabase/auth/signin",
            post(post_auth_signin::post_auth_signin),
        )
        .route(
            "/supabase/auth/signout",
            post(post_auth_signout::post_auth_signout),
        )
        .route("/auth/session", get(get_auth_session::get_auth_session))
}

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.merge(transit_routes())
        .merge(bus_route_routes())
        .nest("/api/tfl", transit_routes().merge(bus_route_routes()))
        .nest("/api/dashboard", dashboard_routes())
        .merge(auth_routes())
}
