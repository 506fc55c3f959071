#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::UserIdentity;
    use crate::state::session::{Session, SessionContext};
    use crate::utils::storage::{AppStorage, MemoryStorage};
    use leptos::*;

    pub fn user_with_role(role: &str) -> UserIdentity {
        UserIdentity {
            id: format!("u-{}", role.to_ascii_lowercase()),
            first_name: "Test".into(),
            last_name: "User".into(),
            role: role.into(),
        }
    }

    pub fn admin_user() -> UserIdentity {
        UserIdentity {
            id: "u-admin".into(),
            first_name: "Dana".into(),
            last_name: "Park".into(),
            role: "admin".into(),
        }
    }

    pub fn regular_user() -> UserIdentity {
        UserIdentity {
            id: "u-staff".into(),
            first_name: "Lee".into(),
            last_name: "Moreno".into(),
            role: "staff".into(),
        }
    }

    pub fn provide_session(session: Session) -> SessionContext {
        let ctx = create_signal(session);
        provide_context::<SessionContext>(ctx);
        ctx
    }

    pub fn provide_memory_storage(entries: &[(&str, &str)]) -> MemoryStorage {
        let memory = MemoryStorage::with_entries(entries.iter().copied());
        provide_context(AppStorage::new(memory.clone()));
        memory
    }
}
