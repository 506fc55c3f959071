use async_trait::async_trait;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, CreateGroupRequest, Group, GroupMember},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait GroupApi {
    async fn create_group(&self, token: &str, request: &CreateGroupRequest)
        -> Result<Group, ApiError>;
    async fn list_groups(&self, token: &str) -> Result<Vec<Group>, ApiError>;
    async fn list_group_members(
        &self,
        token: &str,
        group_name: &str,
    ) -> Result<Vec<GroupMember>, ApiError>;
}

pub fn members_path(group_name: &str) -> String {
    format!(
        "/admin/groups/{}/members",
        encode_segment(group_name)
    )
}

#[async_trait(?Send)]
impl GroupApi for ApiClient {
    async fn create_group(
        &self,
        token: &str,
        request: &CreateGroupRequest,
    ) -> Result<Group, ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint("/admin/groups").await;
        self.send_json(self.http_client().post(url).headers(headers).json(request))
            .await
    }

    async fn list_groups(&self, token: &str) -> Result<Vec<Group>, ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint("/admin/groups").await;
        self.send_json(self.http_client().get(url).headers(headers))
            .await
    }

    async fn list_group_members(
        &self,
        token: &str,
        group_name: &str,
    ) -> Result<Vec<GroupMember>, ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint(&members_path(group_name)).await;
        self.send_json(self.http_client().get(url).headers(headers))
            .await
    }
}
