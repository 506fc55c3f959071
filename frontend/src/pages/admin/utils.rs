use crate::api::{ApiError, CreateGroupRequest, GroupMember};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Settings,
    Groups,
}

impl AdminTab {
    pub const ALL: [AdminTab; 2] = [AdminTab::Settings, AdminTab::Groups];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Settings => "Settings",
            AdminTab::Groups => "Groups",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            AdminTab::Settings => "admin-tab-settings",
            AdminTab::Groups => "admin-tab-groups",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupForm {
    pub name: String,
    pub description: String,
}

impl GroupForm {
    pub fn to_request(&self) -> Result<CreateGroupRequest, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Group name is required."));
        }
        Ok(CreateGroupRequest {
            name: name.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

pub fn member_label(member: &GroupMember) -> String {
    let name = format!("{} {}", member.first_name, member.last_name);
    let name = name.trim();
    match (name.is_empty(), member.email.is_empty()) {
        (false, true) => name.to_string(),
        (false, false) => format!("{} <{}>", name, member.email),
        (true, _) => member.email.clone(),
    }
}
