//! App Router

use salvo::Router;

use crate::{
    addresses, auth, blog, carts, healthcheck, orders, products, reviews, shipping, testimonials,
};

/// The full route tree.
///
/// Catalog, reviews, testimonials and published blog posts are public.
/// Cart, address, order and review submission routes require a bearer
/// token; catalog management, blog management, order administration and
/// the carrier proxy require the admin API key.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::handlers::index::handler)
                .push(
                    Router::new()
                        .hoop(auth::admin::handler)
                        .post(products::handlers::create::handler),
                )
                .push(
                    Router::with_path("{id}")
                        .get(products::handlers::get::handler)
                        .push(
                            Router::new()
                                .hoop(auth::admin::handler)
                                .put(products::handlers::update::handler)
                                .delete(products::handlers::delete::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("cart")
                .hoop(auth::middleware::handler)
                .get(carts::handlers::get::handler)
                .post(carts::handlers::upsert::handler)
                .delete(carts::handlers::clear::handler)
                .push(
                    Router::with_path("{product_id}").delete(carts::handlers::remove::handler),
                ),
        )
        .push(
            Router::with_path("addresses")
                .hoop(auth::middleware::handler)
                .get(addresses::handlers::index::handler)
                .post(addresses::handlers::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(addresses::handlers::get::handler)
                        .put(addresses::handlers::update::handler)
                        .delete(addresses::handlers::delete::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .hoop(auth::middleware::handler)
                .get(orders::handlers::index::handler)
                .post(orders::handlers::create::handler)
                .push(Router::with_path("direct").post(orders::handlers::create_direct::handler))
                .push(Router::with_path("{id}").get(orders::handlers::get::handler)),
        )
        .push(
            Router::with_path("reviews")
                .push(
                    Router::with_path("product/{id}").get(reviews::handlers::for_product::handler),
                )
                .push(
                    Router::new()
                        .hoop(auth::middleware::handler)
                        .post(reviews::handlers::create::handler)
                        .push(
                            Router::with_path("my-reviews")
                                .get(reviews::handlers::mine::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("testimonials")
                .get(testimonials::handlers::index::handler)
                .push(
                    Router::new()
                        .hoop(auth::middleware::handler)
                        .post(testimonials::handlers::create::handler),
                )
                .push(Router::with_path("{id}").get(testimonials::handlers::get::handler)),
        )
        .push(
            // The admin subtree must precede the "{slug}" catch-all.
            Router::with_path("blog")
                .push(
                    Router::with_path("admin")
                        .hoop(auth::admin::handler)
                        .get(blog::handlers::admin_index::handler)
                        .push(Router::with_path("{id}").get(blog::handlers::admin_get::handler)),
                )
                .get(blog::handlers::index::handler)
                .push(
                    Router::new()
                        .hoop(auth::admin::handler)
                        .post(blog::handlers::create::handler),
                )
                .push(
                    Router::with_path("{id}")
                        .hoop(auth::admin::handler)
                        .put(blog::handlers::update::handler)
                        .delete(blog::handlers::delete::handler),
                )
                .push(Router::with_path("{slug}").get(blog::handlers::get_by_slug::handler)),
        )
        .push(
            Router::with_path("admin/orders")
                .hoop(auth::admin::handler)
                .get(orders::handlers::admin_index::handler)
                .push(
                    Router::with_path("{id}")
                        .get(orders::handlers::admin_get::handler)
                        .push(
                            Router::with_path("status")
                                .put(orders::handlers::set_status::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("shiprocket")
                .hoop(auth::admin::handler)
                .push(Router::with_path("ship").post(shipping::handlers::ship::handler))
                .push(Router::with_path("rates").get(shipping::handlers::rates::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;
    use uuid::Uuid;

    use orchard_app::domain::blog::models::PostStatus;

    use crate::{
        auth::admin::ADMIN_KEY_HEADER,
        blog::handlers::tests::make_post,
        test_helpers::{MockApp, TEST_ADMIN_KEY},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        Service::new(Router::new().hoop(inject(app.into_state())).push(app_router()))
    }

    #[tokio::test]
    async fn test_healthcheck_needs_no_credentials() -> TestResult {
        let res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(MockApp::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_requires_bearer_token() -> TestResult {
        let res = TestClient::get("http://example.com/cart")
            .send(&make_service(MockApp::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_product_creation_requires_admin_key() -> TestResult {
        let res = TestClient::post("http://example.com/products")
            .send(&make_service(MockApp::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_blog_admin_listing_is_not_shadowed_by_slugs() -> TestResult {
        let mut app = MockApp::new();

        app.blog.expect_get_by_slug().never();
        app.blog
            .expect_list_all()
            .once()
            .return_once(|| Ok(vec![make_post(Uuid::now_v7(), PostStatus::Draft)]));

        let mut res = TestClient::get("http://example.com/blog/admin")
            .add_header(ADMIN_KEY_HEADER, TEST_ADMIN_KEY, true)
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;
        assert_eq!(body["posts"][0]["status"], "draft");

        Ok(())
    }

    #[tokio::test]
    async fn test_public_blog_slug_still_resolves() -> TestResult {
        let mut app = MockApp::new();

        app.blog
            .expect_get_by_slug()
            .once()
            .withf(|slug| slug == "why-flax")
            .return_once(|_| Ok(make_post(Uuid::now_v7(), PostStatus::Published)));

        let res = TestClient::get("http://example.com/blog/why-flax")
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_carrier_proxy_requires_admin_key() -> TestResult {
        let res = TestClient::get(
            "http://example.com/shiprocket/rates?pickup_postcode=411001&delivery_postcode=400001&weight=0.5",
        )
        .send(&make_service(MockApp::new()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
