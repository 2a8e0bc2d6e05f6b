pub const APP_NAME: &str = "Prop Market Board";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label_is_prefixed() {
        let label = version_label();
        match GIT_TAG {
            Some(tag) => assert_eq!(label, tag),
            None => assert_eq!(label, format!("v{APP_VERSION}")),
        }
    }
}
