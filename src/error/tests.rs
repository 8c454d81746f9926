// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{ConfigError, EnvError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "editor".to_string(),
        key: "backup_suffix".to_string(),
        message: "must not be empty".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'backup_suffix' in section '[editor]': must not be empty"
    );
}

#[test]
fn test_env_error_display() {
    let collision = EnvError::RenameCollision {
        from: "OLD".to_string(),
        to: "NEW".to_string(),
    };
    insta::assert_snapshot!(
        collision.to_string(),
        @"cannot rename 'OLD' to 'NEW': key 'NEW' already exists"
    );

    let missing = EnvError::FileNotFound {
        path: PathBuf::from("/tmp/app/.env"),
    };
    insta::assert_snapshot!(missing.to_string(), @"env file not found: /tmp/app/.env");

    let io = EnvError::io(
        "read",
        "/tmp/app/.env.bak",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    insta::assert_snapshot!(io.to_string(), @"failed to read /tmp/app/.env.bak: gone");
}

#[test]
fn test_env_error_not_found_kind() {
    assert!(EnvError::NotBound.is_not_found());
    assert!(
        EnvError::FileNotFound {
            path: PathBuf::from(".env")
        }
        .is_not_found()
    );
    assert!(
        !EnvError::ProtectedDelete {
            path: PathBuf::from(".env")
        }
        .is_not_found()
    );
    assert!(
        !EnvError::AlreadyExists {
            path: PathBuf::from(".env")
        }
        .is_not_found()
    );
}
