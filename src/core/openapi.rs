use utoipa::{Modify, OpenApi};

use crate::features::credentials::{
    dtos as credentials_dtos, handlers as credentials_handlers, models as credentials_models,
};
use crate::features::suggestions::{dtos as suggestions_dtos, handlers as suggestions_handlers};
use crate::features::tickets::{
    dtos as tickets_dtos, handlers as tickets_handlers, models as tickets_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Credentials
        credentials_handlers::verify_credential,
        // Tickets
        tickets_handlers::list_tickets,
        tickets_handlers::get_ticket,
        // Suggestions
        suggestions_handlers::suggest_for_ticket,
        suggestions_handlers::suggest_for_draft,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Credentials
            credentials_models::VerificationResult,
            credentials_dtos::CredentialVerificationDto,
            ApiResponse<credentials_dtos::CredentialVerificationDto>,
            // Tickets
            tickets_models::TicketStatus,
            tickets_dtos::TicketResponseDto,
            ApiResponse<tickets_dtos::TicketResponseDto>,
            ApiResponse<Vec<tickets_dtos::TicketResponseDto>>,
            // Suggestions
            suggestions_dtos::SuggestDraftDto,
            suggestions_dtos::SuggestionResponseDto,
            ApiResponse<suggestions_dtos::SuggestionResponseDto>,
        )
    ),
    tags(
        (name = "credentials", description = "On-chain credential verification"),
        (name = "tickets", description = "Help desk tickets"),
        (name = "suggestions", description = "AI resolution suggestions for tickets"),
    ),
    info(
        title = "Helpdesk API",
        version = "0.1.0",
        description = "API documentation for the help desk backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/credentials/{user_id}/verify",
            "/api/tickets",
            "/api/tickets/{id}",
            "/api/tickets/{id}/suggestion",
            "/api/suggestions",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Desk".to_string(),
            version: "2.0.0".to_string(),
            description: "internal".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Desk");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("internal"));
    }
}
