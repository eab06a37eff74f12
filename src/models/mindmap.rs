//! Mind-map models: a recursive node tree per video

use serde::{Deserialize, Serialize};

/// Response of `GET mindmap/?video_uuid=` and `POST mindmap/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindMapResponse {
    pub message: String,
    pub mindmap: MindMapTree,
    pub video_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindMapTree {
    pub root: MindMapNode,
    pub title: String,
}

/// One node in the tree; leaves omit `children`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindMapNode {
    pub message: String,
    pub description: Option<String>,
    pub children: Option<Vec<MindMapNode>>,
}

/// Body for `POST mindmap/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindMapRequest {
    pub video_uuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_tree_decodes() {
        let json = r#"{
            "message": "ok",
            "mindmap": {
                "root": {
                    "message": "Linear Algebra",
                    "description": null,
                    "children": [
                        {"message": "Vectors", "description": "Basics", "children": null}
                    ]
                },
                "title": "Linear Algebra"
            },
            "video_title": "Lecture 1"
        }"#;

        let response: MindMapResponse = serde_json::from_str(json).expect("Should decode");
        let children = response.mindmap.root.children.expect("Should have children");
        assert_eq!(children[0].message, "Vectors");
        assert!(children[0].children.is_none());
    }
}
