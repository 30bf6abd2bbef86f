/*!
 * 身份认证中间件
 *
 * 从 `Authorization: Bearer <token>` 中取出令牌，交给 [`AccessGuard`] 校验，
 * 成功后把 [`Identity`] 存入请求扩展，处理函数可以直接把 `Identity` 作为参数提取。
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireJWT;
 * use crate::models::auth::Identity;
 *
 * async fn protected(identity: Identity) -> String {
 *     format!("Hello, {} ({})", identity.contact, identity.role)
 * }
 *
 * cfg.service(
 *     web::scope("/students")
 *         .wrap(RequireJWT)
 *         .route("", web::get().to(protected)),
 * );
 * ```
 *
 * 认证失败（缺少令牌、令牌无效或过期、账户已删除）统一返回 401。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
    body::EitherBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    http::{StatusCode, header::AUTHORIZATION},
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, error, info};

use crate::errors::ExamSystemError;
use crate::models::{ErrorCode, auth::Identity};
use crate::services::AccessGuard;

use super::create_error_response;

#[derive(Clone)]
pub struct RequireJWT;

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 预检请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            let Some(guard) = req.app_data::<web::Data<AccessGuard>>().cloned() else {
                error!("AccessGuard not registered in app data");
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::InternalServerError,
                        "Internal server error",
                    )
                    .map_into_right_body(),
                ));
            };

            let header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned);

            match guard.authenticate(header.as_deref()).await {
                Ok(identity) => {
                    debug!(
                        "Authentication successful for account {}",
                        identity.account_id
                    );
                    req.extensions_mut().insert(identity);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Authentication failed for request to {}: {}",
                        req.path(),
                        err.message()
                    );
                    Ok(req.into_response(err.error_response().map_into_right_body()))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 从请求扩展中提取身份
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_identity(req: &HttpRequest) -> Option<Identity> {
        req.extensions().get::<Identity>().cloned()
    }
}

// 处理函数可直接声明 `identity: Identity` 参数
impl FromRequest for Identity {
    type Error = ExamSystemError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            RequireJWT::extract_identity(req)
                .ok_or_else(|| ExamSystemError::authentication("Not authenticated")),
        )
    }
}
