//! Built-in content record types.

use crate::record::{Accessor, Field, Record};
use crate::types::RecordId;

/// A blog article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub id: Option<RecordId>,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Record for Article {
    const TYPE_NAME: &'static str = "Article";
    const COLLECTION: &'static str = "articles";
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "ID",
            stored_as: "_id",
            accessor: Accessor::Identifier {
                get: |r| r.id,
                set: |r, id| r.id = id,
            },
        },
        Field {
            name: "Title",
            stored_as: "title",
            accessor: Accessor::Text {
                get: |r| r.title.as_str(),
                set: |r, v| r.title = v,
            },
        },
        Field {
            name: "Content",
            stored_as: "content",
            accessor: Accessor::Text {
                get: |r| r.content.as_str(),
                set: |r, v| r.content = v,
            },
        },
        Field {
            name: "Author",
            stored_as: "author",
            accessor: Accessor::Text {
                get: |r| r.author.as_str(),
                set: |r, v| r.author = v,
            },
        },
    ];
}

/// A category articles can be filed under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub id: Option<RecordId>,
    pub name: String,
}

impl Record for Category {
    const TYPE_NAME: &'static str = "Category";
    const COLLECTION: &'static str = "categories";
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "ID",
            stored_as: "_id",
            accessor: Accessor::Identifier {
                get: |r| r.id,
                set: |r, id| r.id = id,
            },
        },
        Field {
            name: "Name",
            stored_as: "name",
            accessor: Accessor::Text {
                get: |r| r.name.as_str(),
                set: |r, v| r.name = v,
            },
        },
    ];
}

/// A reader comment on an article.
///
/// `article_id` is kept as free text: comments are not checked against
/// existing articles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub id: Option<RecordId>,
    pub article_id: String,
    pub content: String,
    pub author: String,
}

impl Record for Comment {
    const TYPE_NAME: &'static str = "Comment";
    const COLLECTION: &'static str = "comments";
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            name: "ID",
            stored_as: "_id",
            accessor: Accessor::Identifier {
                get: |r| r.id,
                set: |r, id| r.id = id,
            },
        },
        Field {
            name: "ArticleID",
            stored_as: "article_id",
            accessor: Accessor::Text {
                get: |r| r.article_id.as_str(),
                set: |r, v| r.article_id = v,
            },
        },
        Field {
            name: "Content",
            stored_as: "content",
            accessor: Accessor::Text {
                get: |r| r.content.as_str(),
                set: |r, v| r.content = v,
            },
        },
        Field {
            name: "Author",
            stored_as: "author",
            accessor: Accessor::Text {
                get: |r| r.author.as_str(),
                set: |r, v| r.author = v,
            },
        },
    ];
}
