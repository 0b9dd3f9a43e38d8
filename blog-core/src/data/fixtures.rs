use crate::domain::article::Article;
use crate::domain::friend::{Friend, LinkKind};

const BLOG_BG: &str = "/basic/blog_bg.png";

const GRAPH_CAPTURE_BODY: &str = r#"# A tiny forward computation graph tracer in pure Python

## Intro

A reader asked for a stripped-down `torch.fx.symbolic_trace`. This post builds
one from scratch to show how graph capture works without the framework noise.

## What is a computation graph

A computation graph splits a calculation into small operations (add, mul,
conv, ...) and records how they depend on each other. It enables:

- **automatic differentiation**
- **graph level optimisation**
- **hardware mapping**
- **serialisation and deployment**

## Design

1. track calls with decorators and reflection
2. define the basic node types
3. build the graph while the function runs
4. print and serialise the result

```python
class Node:
    def __init__(self, name, op_type, inputs=None):
        self.name = name
        self.op_type = op_type
        self.inputs = inputs or []
        self.output = None
```

## Next steps

More operators, better variable tracking, static analysis, graph passes such
as constant folding, and a backward pass.
"#;

pub fn articles() -> Vec<Article> {
    vec![
        Article::new(
            "1",
            "A tiny forward computation graph tracer in pure Python",
            &["python", "torch", "compiler", "graph"],
            "2025-08-25 23:06",
            "2025-08-25 23:06",
            2500,
        )
        .with_body(GRAPH_CAPTURE_BODY),
        Article::new(
            "2",
            "Vue 3 Composition API best practices",
            &["vue", "javascript", "frontend", "web"],
            "2025-08-24 15:30",
            "2025-08-24 16:45",
            3200,
        )
        .with_body("The Composition API gives a more flexible way to organise and reuse component logic. A few practices that keep Vue code clear and maintainable..."),
        Article::new(
            "3",
            "Go concurrency in depth",
            &["go", "concurrency", "backend", "performance"],
            "2025-08-23 10:15",
            "2025-08-23 14:20",
            4500,
        )
        .with_body("Go is known for its small syntax and strong concurrency support. A walk through goroutines, channels and select, with examples from real projects...")
        .with_bg_image(BLOG_BG),
        Article::new(
            "4",
            "Exploring React Server Components",
            &["react", "nextjs", "ssr", "frontend"],
            "2025-08-22 09:45",
            "2025-08-22 11:30",
            2800,
        )
        .with_body("React Server Components render on the server and shrink the client bundle. The basic concepts and how to use them..."),
        Article::new(
            "5",
            "Shipping services with Docker",
            &["docker", "devops", "deployment", "linux"],
            "2025-08-21 14:20",
            "2025-08-21 16:50",
            3600,
        )
        .with_body("Containers are the default way to deploy applications. Writing a Dockerfile, building images, running containers and composing them..."),
        Article::new(
            "6",
            "The TypeScript type system, advanced edition",
            &["typescript", "javascript", "frontend", "typing"],
            "2025-08-20 10:30",
            "2025-08-20 15:20",
            3800,
        )
        .with_body("Generics, conditional types and mapped types, with practical cases for safer and more maintainable code...")
        .with_bg_image(BLOG_BG),
        Article::new(
            "7",
            "Micro-frontend architecture in practice",
            &["microfrontend", "frontend", "architecture", "webpack"],
            "2025-08-19 09:15",
            "2025-08-19 11:45",
            4200,
        )
        .with_body("As frontends grow, micro-frontends become a way to split the complexity. Core ideas, design rules and lessons from real projects..."),
        Article::new(
            "8",
            "GraphQL API design",
            &["graphql", "api", "backend", "frontend"],
            "2025-08-18 14:45",
            "2025-08-18 17:20",
            3400,
        )
        .with_body("Schema design, query cost and security considerations when building GraphQL APIs..."),
        Article::new(
            "9",
            "Frontend performance tuning",
            &["performance", "frontend", "optimization", "web"],
            "2025-08-17 10:00",
            "2025-08-17 16:30",
            4800,
        )
        .with_body("Resource loading, rendering and runtime costs, plus the tools to measure them...")
        .with_bg_image(BLOG_BG),
        Article::new(
            "10",
            "Modern CSS layout techniques",
            &["css", "frontend", "layout", "web"],
            "2025-08-16 15:30",
            "2025-08-16 18:15",
            3200,
        )
        .with_body("From floats to Flexbox and Grid: the core of modern CSS layout and a few handy tricks..."),
    ]
}

pub fn friends() -> Vec<Friend> {
    vec![
        Friend::new(
            "https://avatars.githubusercontent.com/u/155219051?v=4",
            "cuijunjie183",
            "C++ expert, core member of the RM algorithm team, patient mentor for newcomers.",
            "https://github.com/cuijunjie18",
            LinkKind::CodeHosting,
        ),
        Friend::new(
            "https://avatars.githubusercontent.com/u/59416203?v=4",
            "锦恢",
            "A true expert and a personal role model.",
            "https://kirigaya.cn/home",
            LinkKind::PersonalSite,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{articles, friends};

    #[test]
    fn article_ids_are_unique() {
        let articles = articles();
        let ids: HashSet<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), articles.len());
        assert_eq!(articles.len(), 10);
    }

    #[test]
    fn every_fixture_article_is_renderable() {
        assert!(articles().iter().all(|a| a.body.is_some() || a.markdown_path.is_some()));
    }

    #[test]
    fn friend_fixture_keeps_order() {
        let names: Vec<_> = friends().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["cuijunjie183", "锦恢"]);
    }
}
