//! One-shot database seeder: fills the projects and tech-stack tables with
//! the showcase content. Run against a fresh database:
//!
//! ```text
//! cargo run --bin seed
//! ```

use folio::config::db::DB;
use folio::config::AppConfig;
use folio::model::project::{CreateProjectRequest, Project};
use folio::model::tech::{CreateTechItemRequest, TechItem};
use folio::util::common::load_dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = AppConfig::from_env();
    let db = DB::new(&config.db.url, config.db.pool_size).await?;
    db.migrate().await?;

    println!("Seeding data...");

    for project in projects_data() {
        Project::create(&db, &project).await?;
    }

    for tech in tech_stack_data() {
        TechItem::create(&db, &tech).await?;
    }

    println!("Data seeded successfully!");
    Ok(())
}

fn project(
    title: &str,
    description: &str,
    image: &str,
    category: &str,
    tags: &[&str],
    primary_tags: &[&str],
    sort_order: i64,
) -> CreateProjectRequest {
    CreateProjectRequest {
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        primary_tags: primary_tags.iter().map(|t| t.to_string()).collect(),
        demo_url: "#".to_string(),
        github_url: "#".to_string(),
        is_active: None,
        sort_order: Some(sort_order),
    }
}

fn projects_data() -> Vec<CreateProjectRequest> {
    vec![
        project(
            "NextCommerce",
            "A full-featured e-commerce platform built with Next.js, featuring real-time inventory, payment integration, and advanced analytics dashboard.",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            "web-app",
            &["Next.js", "React", "TypeScript", "Tailwind", "MongoDB", "Stripe"],
            &["Next.js", "Stripe"],
            1,
        ),
        project(
            "TaskFlow Pro",
            "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
            "https://images.unsplash.com/photo-1611224923853-80b023f02d71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            "web-app",
            &["Next.js", "Socket.io", "DnD Kit", "PostgreSQL"],
            &["React", "Firebase"],
            2,
        ),
        project(
            "CloudAPI Gateway",
            "A scalable REST API gateway with authentication, rate limiting, caching, and comprehensive API documentation.",
            "https://images.unsplash.com/photo-1555949963-aa79dcee981c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            "api",
            &["Express.js", "JWT", "Swagger", "Docker"],
            &["Node.js", "Redis"],
            3,
        ),
        project(
            "DevToolbox",
            "A collection of development utilities including code generators, API testing tools, and deployment automation scripts.",
            "https://images.unsplash.com/photo-1581447109200-bf2769116351?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            "tools",
            &["Node.js", "Commander", "Inquirer", "Chalk"],
            &["CLI", "Utility"],
            4,
        ),
        project(
            "DataViz Pro",
            "A comprehensive analytics dashboard with interactive charts, real-time data streaming, and custom visualization components.",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            "web-app",
            &["React", "Chart.js", "WebSocket", "GraphQL"],
            &["D3.js", "Charts"],
            5,
        ),
        project(
            "MicroStack",
            "A scalable microservices architecture with containerized services, API gateway, and comprehensive monitoring solution.",
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
            "api",
            &["Kubernetes", "gRPC", "Prometheus", "Istio"],
            &["Docker", "K8s"],
            6,
        ),
    ]
}

fn tech(
    name: &str,
    icon: &str,
    bg: &str,
    description: &str,
    category: &str,
    sort_order: i64,
) -> CreateTechItemRequest {
    CreateTechItemRequest {
        name: name.to_string(),
        icon: icon.to_string(),
        bg: bg.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        is_active: None,
        sort_order: Some(sort_order),
    }
}

fn tech_stack_data() -> Vec<CreateTechItemRequest> {
    vec![
        // Frontend
        tech("Next.js", "Next", "bg-black", "React Framework", "frontend", 1),
        tech("React", "fab fa-react", "bg-blue-500", "JavaScript Library", "frontend", 2),
        tech("Tailwind CSS", "TW", "bg-blue-400", "Utility-First CSS", "frontend", 3),
        tech("TypeScript", "TS", "bg-blue-600", "Typed JavaScript", "frontend", 4),
        // Backend
        tech("Node.js", "fab fa-node-js", "bg-green-600", "JavaScript Runtime", "backend", 1),
        tech("Express.js", "Ex", "bg-gray-700", "Web Framework", "backend", 2),
        tech("GraphQL", "GQL", "bg-pink-500", "Query Language", "backend", 3),
        tech("AWS", "fab fa-aws", "bg-orange-500", "Cloud Platform", "backend", 4),
        // Database
        tech("MongoDB", "Mo", "bg-green-500", "NoSQL Database", "database", 1),
        tech("PostgreSQL", "PG", "bg-blue-700", "SQL Database", "database", 2),
        tech("Redis", "Re", "bg-red-600", "In-Memory Store", "database", 3),
        tech("Firebase", "FB", "bg-yellow-500", "BaaS Platform", "database", 4),
        // Tools
        tech("Docker", "fab fa-docker", "bg-blue-600", "Containerization", "tools", 1),
        tech("Git", "fab fa-git-alt", "bg-orange-600", "Version Control", "tools", 2),
        tech("Kubernetes", "K8s", "bg-purple-600", "Orchestration", "tools", 3),
        tech("Vercel", "Ve", "bg-black", "Deployment", "tools", 4),
    ]
}
