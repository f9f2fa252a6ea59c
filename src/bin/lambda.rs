//! AWS Lambda HTTP handler for growth projections
//!
//! POST a JSON `ProjectionRequest` (an empty body uses the defaults) and pick
//! the representation with `?format=table|csv|json|chart` (default json).

use clap::ValueEnum;
use growth_projection::report::{render, DEFAULT_CSV_FILENAME};
use growth_projection::{OutputFormat, ProjectionEngine, ProjectionRequest};
use lambda_http::{run, service_fn, Body, Request, RequestExt, Response};
use lambda_runtime::Error;

/// Longest horizon served over HTTP (100 years)
const MAX_HORIZON_MONTHS: u32 = 1200;

fn text_response(status: u16, message: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "text/plain; charset=utf-8")
        .body(Body::from(message))
        .map_err(Box::new)?;
    Ok(response)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let format = match event.query_string_parameters_ref().and_then(|q| q.first("format")) {
        Some(name) => match OutputFormat::from_str(name, true) {
            Ok(format) => format,
            Err(_) => return text_response(400, format!("unknown format '{name}'")),
        },
        None => OutputFormat::Json,
    };

    let body = match std::str::from_utf8(event.body().as_ref()) {
        Ok(body) => body,
        Err(e) => return text_response(400, format!("request body is not UTF-8: {e}")),
    };

    let request = match ProjectionRequest::from_json(body) {
        Ok(request) => request,
        Err(e) => return text_response(400, e.to_string()),
    };

    if request.growth.horizon_months > MAX_HORIZON_MONTHS {
        return text_response(
            400,
            format!("horizon_months must be at most {MAX_HORIZON_MONTHS}"),
        );
    }

    let engine = match ProjectionEngine::new(request.growth, request.pricing) {
        Ok(engine) => engine,
        Err(e) => return text_response(400, e.to_string()),
    };

    let result = engine.run();
    let rendered = render(&result, format)?;
    log::info!(
        "Projected {} months for {} initial users as {:?}",
        request.growth.horizon_months,
        request.growth.initial_users,
        format
    );

    let mut builder = Response::builder()
        .status(200)
        .header("content-type", rendered.content_type);
    if format == OutputFormat::Csv {
        builder = builder.header(
            "content-disposition",
            format!("attachment; filename=\"{DEFAULT_CSV_FILENAME}\""),
        );
    }

    let response = builder.body(Body::from(rendered.body)).map_err(Box::new)?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
