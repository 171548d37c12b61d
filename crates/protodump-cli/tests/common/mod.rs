//! Prost-style message structs with the checked-in generated code attached.

#![allow(dead_code)]

pub mod model {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Photo {
        pub url: String,
        pub width_px: u32,
        pub thumbnail: Option<Box<Photo>>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Post {
        pub id: i64,
        pub view_count: u64,
        pub score: i32,
        pub flags: u32,
        pub rating: f32,
        pub weight: f64,
        pub pinned: bool,
        pub title: String,
        pub priority: Option<i32>,
        pub cover: Option<Photo>,
        pub body: Option<post::Body>,
    }

    pub mod post {
        #[derive(Debug, Clone, PartialEq)]
        pub enum Body {
            Text(String),
            Photo(super::Photo),
            RefId(i64),
        }
    }

    include!("../fixtures/post_generated.rs");
}

pub const SCHEMA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/post_schema.toml");
