use serde_json::{json, Value};

/// OpenAPI 3 description of the HTTP surface, served as JSON.
///
/// `ApiKeyAuth` is declared on the trade routes but nothing checks it yet.
pub fn openapi_document(server_url: &str) -> Value {
    let error_response = |description: &str| {
        json!({
            "description": description,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/Error" }
                }
            }
        })
    };

    let csv_response = |description: &str, filename: &str| {
        json!({
            "description": description,
            "content": {
                "text/csv": {
                    "schema": { "type": "string", "format": "binary" }
                }
            },
            "headers": {
                "Content-Disposition": {
                    "schema": { "type": "string" },
                    "description": format!("Attachment with filename in format '{filename}'")
                }
            }
        })
    };

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Binance to Tradezella API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Binance USD-M futures trades as Tradezella import CSV"
        },
        "servers": [
            { "url": server_url, "description": "Local server" }
        ],
        "paths": {
            "/api/trades/latest": {
                "get": {
                    "tags": ["Trades"],
                    "summary": "Get latest trades",
                    "description": "Trades newer than the last synced trade of each symbol. Advances the checkpoint.",
                    "security": [{ "ApiKeyAuth": [] }],
                    "responses": {
                        "200": csv_response(
                            "Latest trades as CSV file, empty when there is nothing new",
                            "latest-trades-YYYY-MM-DD.csv"
                        ),
                        "401": { "description": "Unauthorized - Invalid or missing API key" },
                        "500": error_response("Internal server error")
                    }
                }
            },
            "/api/trades/date/{date}": {
                "get": {
                    "tags": ["Trades"],
                    "summary": "Get trades by date",
                    "description": "All fetched trades on a UTC calendar day in YYYYMMDD format",
                    "security": [{ "ApiKeyAuth": [] }],
                    "parameters": [
                        {
                            "in": "path",
                            "name": "date",
                            "required": true,
                            "description": "Date in YYYYMMDD format (e.g., 20230615)",
                            "schema": { "type": "string", "pattern": "^\\d{8}$", "example": "20230615" }
                        }
                    ],
                    "responses": {
                        "200": csv_response(
                            "Trades for the specified date as CSV file",
                            "trades-YYYYMMDD.csv"
                        ),
                        "400": error_response("Bad request - Invalid date format"),
                        "401": { "description": "Unauthorized - Invalid or missing API key" },
                        "500": error_response("Internal server error")
                    }
                }
            },
            "/health": {
                "get": {
                    "tags": ["Health"],
                    "summary": "Liveness probe",
                    "responses": {
                        "200": {
                            "description": "Service is up",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": { "status": { "type": "string", "example": "ok" } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "ApiKeyAuth": { "type": "apiKey", "in": "header", "name": "x-api-key" }
            },
            "schemas": {
                "Error": {
                    "type": "object",
                    "properties": {
                        "success": { "type": "boolean", "example": false },
                        "error": { "type": "string", "example": "Error description" }
                    }
                }
            }
        }
    })
}

/*----- */
// Tests
/*----- */
