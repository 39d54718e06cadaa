// Nested Matrix
// Depth-limited `include` matrices for workflows that dispatch themselves

use serde::{Deserialize, Serialize};

/// Depth at which the nested matrix stops producing jobs
pub const MAX_DEPTH: u32 = 3;

/// A GitHub Actions style `{ "include": [...] }` matrix
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NestedMatrix {
    #[serde(default)]
    pub include: Vec<NestedJob>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedJob {
    /// Depth the child job will run at
    pub depth: u32,
    pub id: String,
}

/// Matrix for a job running at `depth`.
///
/// Depths 0 and 1 fan out to two children, depth 2 to one, and anything
/// from [`MAX_DEPTH`] on to none.
pub fn nested_matrix(depth: u32) -> NestedMatrix {
    let width = match depth {
        d if d >= MAX_DEPTH => 0,
        d if d < 2 => 2,
        _ => 1,
    };

    NestedMatrix {
        include: (0..width)
            .map(|i| NestedJob {
                depth: depth + 1,
                id: format!("job-{}-{}", depth, i),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_depth_fans_out() {
        let matrix = nested_matrix(0);
        assert_eq!(
            matrix.include,
            vec![
                NestedJob {
                    depth: 1,
                    id: "job-0-0".to_string()
                },
                NestedJob {
                    depth: 1,
                    id: "job-0-1".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_widths_by_depth() {
        assert_eq!(nested_matrix(1).include.len(), 2);
        assert_eq!(nested_matrix(2).include.len(), 1);
        assert_eq!(nested_matrix(2).include[0].id, "job-2-0");
        assert_eq!(nested_matrix(2).include[0].depth, 3);
    }

    #[test]
    fn test_max_depth_is_empty() {
        assert!(nested_matrix(MAX_DEPTH).include.is_empty());
        assert!(nested_matrix(42).include.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&nested_matrix(3)).unwrap();
        assert_eq!(json, r#"{"include":[]}"#);

        let json = serde_json::to_string(&nested_matrix(2)).unwrap();
        assert_eq!(json, r#"{"include":[{"depth":3,"id":"job-2-0"}]}"#);
    }
}
