//! GraphQL Operations
//!
//! Every query and mutation this layer sends to the data service, plus the
//! request envelope that carries one of them.

use serde::Serialize;
use serde_json::Value;

use crate::domain::Access;

/// Named operation understood by the data service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetUser,
    CreateUser,
    CreateProject,
    UpdateProject,
    DeleteProject,
    ProjectById,
    ProjectsByCategory,
    AllProjects,
    UserProjects,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::GetUser => "GetUser",
            Self::CreateUser => "CreateUser",
            Self::CreateProject => "CreateProject",
            Self::UpdateProject => "UpdateProject",
            Self::DeleteProject => "DeleteProject",
            Self::ProjectById => "GetProjectById",
            Self::ProjectsByCategory => "getProjects",
            Self::AllProjects => "getAllProjects",
            Self::UserProjects => "getUserProjects",
        }
    }

    /// Credential the operation must carry
    pub fn access(self) -> Access {
        match self {
            Self::CreateProject | Self::UpdateProject | Self::DeleteProject => Access::UserToken,
            _ => Access::ApiKey,
        }
    }

    pub fn document(self) -> &'static str {
        match self {
            Self::GetUser => GET_USER,
            Self::CreateUser => CREATE_USER,
            Self::CreateProject => CREATE_PROJECT,
            Self::UpdateProject => UPDATE_PROJECT,
            Self::DeleteProject => DELETE_PROJECT,
            Self::ProjectById => PROJECT_BY_ID,
            Self::ProjectsByCategory => PROJECTS_BY_CATEGORY,
            Self::AllProjects => ALL_PROJECTS,
            Self::UserProjects => USER_PROJECTS,
        }
    }
}

/// One operation with its variables
#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlRequest {
    pub operation: Operation,
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn new(operation: Operation, variables: Value) -> Self {
        Self {
            operation,
            variables,
        }
    }

    /// JSON body posted to the GraphQL endpoint
    pub fn body(&self) -> GraphqlBody<'_> {
        GraphqlBody {
            query: self.operation.document(),
            operation_name: self.operation.name(),
            variables: &self.variables,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlBody<'a> {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: &'a Value,
}

// ============================================
// Documents
// ============================================

const GET_USER: &str = r#"
  query GetUser($email: String!) {
    user(by: { email: $email }) {
      id
      name
      email
      avatarUrl
      description
      githubUrl
      linkedinUrl
    }
  }
"#;

const CREATE_USER: &str = r#"
  mutation CreateUser($input: UserCreateInput!) {
    userCreate(input: $input) {
      user {
        id
        name
        email
        avatarUrl
        description
        githubUrl
        linkedinUrl
      }
    }
  }
"#;

const CREATE_PROJECT: &str = r#"
  mutation CreateProject($input: ProjectCreateInput!) {
    projectCreate(input: $input) {
      project {
        id
        title
        description
        createdBy {
          email
          name
        }
      }
    }
  }
"#;

const UPDATE_PROJECT: &str = r#"
  mutation UpdateProject($id: ID!, $input: ProjectUpdateInput!) {
    projectUpdate(by: { id: $id }, input: $input) {
      project {
        id
        title
        description
        createdBy {
          email
          name
        }
      }
    }
  }
"#;

const DELETE_PROJECT: &str = r#"
  mutation DeleteProject($id: ID!) {
    projectDelete(by: { id: $id }) {
      deletedId
    }
  }
"#;

const PROJECT_BY_ID: &str = r#"
  query GetProjectById($id: ID!) {
    project(by: { id: $id }) {
      id
      title
      description
      image
      liveSiteUrl
      githubUrl
      category
      createdBy {
        id
        name
        email
        avatarUrl
      }
    }
  }
"#;

const PROJECTS_BY_CATEGORY: &str = r#"
  query getProjects($category: String, $endCursor: String) {
    projectSearch(first: 8, after: $endCursor, filter: { category: { eq: $category } }) {
      pageInfo {
        hasNextPage
        hasPreviousPage
        startCursor
        endCursor
      }
      edges {
        node {
          id
          title
          description
          image
          liveSiteUrl
          githubUrl
          category
          createdBy {
            id
            email
            name
            avatarUrl
          }
        }
      }
    }
  }
"#;

const ALL_PROJECTS: &str = r#"
  query getAllProjects($first: Int) {
    projectSearch(first: $first) {
      pageInfo {
        hasNextPage
        hasPreviousPage
        startCursor
        endCursor
      }
      edges {
        node {
          id
          title
          description
          image
          liveSiteUrl
          githubUrl
          category
          createdBy {
            id
            email
            name
            avatarUrl
          }
        }
      }
    }
  }
"#;

const USER_PROJECTS: &str = r#"
  query getUserProjects($id: ID!, $last: Int = 4) {
    user(by: { id: $id }) {
      id
      name
      email
      description
      avatarUrl
      githubUrl
      linkedinUrl
      projects(last: $last) {
        edges {
          node {
            id
            title
            image
          }
        }
      }
    }
  }
"#;
