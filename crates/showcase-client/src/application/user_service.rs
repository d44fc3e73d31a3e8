//! User Application Service (Use Case)

use std::sync::Arc;

use serde_json::{json, Value};

use showcase::{DomainError, GraphqlRequest, GraphqlTransport, NewUser, Operation};

use super::{to_variables, HeaderPolicy};

/// Application service for user lookups and signup
pub struct UserService<T: GraphqlTransport> {
    transport: Arc<T>,
    policy: HeaderPolicy,
}

impl<T: GraphqlTransport> UserService<T> {
    pub fn new(transport: Arc<T>, policy: HeaderPolicy) -> Self {
        Self { transport, policy }
    }

    async fn send(&self, request: GraphqlRequest) -> Result<Value, DomainError> {
        let credential = self.policy.credential_for(request.operation, None);
        self.transport.send(request, &credential).await
    }

    /// Look up a user by email
    pub async fn get_user(&self, email: &str) -> Result<Value, DomainError> {
        self.send(GraphqlRequest::new(Operation::GetUser, json!({ "email": email })))
            .await
    }

    /// Register a user
    pub async fn create_user(&self, user: &NewUser) -> Result<Value, DomainError> {
        let request = GraphqlRequest::new(
            Operation::CreateUser,
            json!({ "input": to_variables(user)? }),
        );
        let response = self.send(request).await?;

        tracing::info!(email = %user.email, "Created user");

        Ok(response)
    }
}
