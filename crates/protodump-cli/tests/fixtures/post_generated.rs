// @generated by protodump. Do not edit.
// Message: Photo

impl Photo {
    /// Builds the JSON node tree of this `Photo`.
    pub fn to_json(&self) -> ::serde_json::Value {
        let mut fields = ::serde_json::Map::new();
        fields.insert("url".to_string(), ::serde_json::Value::String(self.url.clone()));
        fields.insert("widthPx".to_string(), ::serde_json::Value::from(f64::from(self.width_px)));
        if let Some(value) = &self.thumbnail {
            fields.insert("thumbnail".to_string(), value.to_json());
        }
        ::serde_json::Value::Object(fields)
    }

    /// Renders this `Photo` as an indented literal, one field per line.
    pub fn to_literal(&self, indent: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}url: {:?},\n", indent, self.url));
        out.push_str(&format!("{}width_px: {},\n", indent, self.width_px));
        if let Some(value) = &self.thumbnail {
            out.push_str(&format!("{}thumbnail: Photo{{\n", indent));
            out.push_str(&value.to_literal(&[indent, "\t"].concat()));
            out.push_str(&format!("{}}},\n", indent));
        }
        out
    }
}

// @generated by protodump. Do not edit.
// Message: Post

impl Post {
    /// Builds the JSON node tree of this `Post`.
    pub fn to_json(&self) -> ::serde_json::Value {
        let mut fields = ::serde_json::Map::new();
        fields.insert("id".to_string(), ::serde_json::Value::String(self.id.to_string()));
        fields.insert("viewCount".to_string(), ::serde_json::Value::String(self.view_count.to_string()));
        fields.insert("score".to_string(), ::serde_json::Value::from(f64::from(self.score)));
        fields.insert("flags".to_string(), ::serde_json::Value::from(f64::from(self.flags)));
        fields.insert("rating".to_string(), ::serde_json::Value::from(f64::from(self.rating)));
        fields.insert("weight".to_string(), ::serde_json::Value::from(f64::from(self.weight)));
        fields.insert("pinned".to_string(), ::serde_json::Value::Bool(self.pinned));
        fields.insert("title".to_string(), ::serde_json::Value::String(self.title.clone()));
        if let Some(value) = &self.priority {
            fields.insert("priority".to_string(), ::serde_json::Value::from(f64::from(*value)));
        }
        if let Some(value) = &self.cover {
            fields.insert("cover".to_string(), value.to_json());
        }
        if let Some(selected) = &self.body {
            let mut entry = ::serde_json::Map::new();
            match selected {
                post::Body::Text(value) => {
                    entry.insert("case".to_string(), ::serde_json::Value::String("text".to_string()));
                    entry.insert("value".to_string(), ::serde_json::Value::String(value.clone()));
                }
                post::Body::Photo(value) => {
                    entry.insert("case".to_string(), ::serde_json::Value::String("photo".to_string()));
                    entry.insert("value".to_string(), value.to_json());
                }
                post::Body::RefId(value) => {
                    entry.insert("case".to_string(), ::serde_json::Value::String("refId".to_string()));
                    entry.insert("value".to_string(), ::serde_json::Value::String(value.to_string()));
                }
            }
            fields.insert("body".to_string(), ::serde_json::Value::Object(entry));
        }
        ::serde_json::Value::Object(fields)
    }

    /// Renders this `Post` as an indented literal, one field per line.
    pub fn to_literal(&self, indent: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}id: {},\n", indent, self.id));
        out.push_str(&format!("{}view_count: {},\n", indent, self.view_count));
        out.push_str(&format!("{}score: {},\n", indent, self.score));
        out.push_str(&format!("{}flags: {},\n", indent, self.flags));
        out.push_str(&format!("{}rating: {},\n", indent, self.rating));
        out.push_str(&format!("{}weight: {},\n", indent, self.weight));
        out.push_str(&format!("{}pinned: {},\n", indent, self.pinned));
        out.push_str(&format!("{}title: {:?},\n", indent, self.title));
        if let Some(value) = &self.priority {
            out.push_str(&format!("{}priority: {},\n", indent, value));
        }
        if let Some(value) = &self.cover {
            out.push_str(&format!("{}cover: Photo{{\n", indent));
            out.push_str(&value.to_literal(&[indent, "\t"].concat()));
            out.push_str(&format!("{}}},\n", indent));
        }
        if let Some(selected) = &self.body {
            match selected {
                post::Body::Text(value) => {
                    out.push_str(&format!("{}body: Text({:?}),\n", indent, value));
                }
                post::Body::Photo(value) => {
                    out.push_str(&format!("{}body: Photo(Photo{{\n", indent));
                    out.push_str(&value.to_literal(&[indent, "\t"].concat()));
                    out.push_str(&format!("{}}}),\n", indent));
                }
                post::Body::RefId(value) => {
                    out.push_str(&format!("{}body: RefId({}),\n", indent, value));
                }
            }
        }
        out
    }
}
