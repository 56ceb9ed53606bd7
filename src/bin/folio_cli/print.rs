use folio::types::{Category, Post};
use folio::view::{CategoryView, PostListView};

pub fn post_line(post: &Post) {
    println!(
        "#{}  {}  {}  [{}]",
        post.id, post.date, post.title, post.category
    );
    if !post.excerpt.is_empty() {
        println!("    {}", post.excerpt);
    }
}

pub fn post_list(view: &PostListView) {
    if view.posts.is_empty() {
        empty_state("No articles found.");
        return;
    }
    println!("page {} of {}", view.page, view.total_pages);
    for post in &view.posts {
        post_line(post);
    }
}

pub fn post_detail(post: &Post) {
    println!("{}", post.title);
    println!("{} · {} · [{}]", post.date, post.author, post.category);
    if !post.tags.is_empty() {
        println!("tags: {}", post.tags.join(", "));
    }
    println!();
    match post.content.as_deref() {
        Some(content) => println!("{content}"),
        None => println!("{}", post.excerpt),
    }
}

pub fn category_list(categories: &[Category]) {
    if categories.is_empty() {
        empty_state("No categories found.");
        return;
    }
    for category in categories {
        println!(
            "{}  ({} articles)  {}",
            category.name, category.count, category.description
        );
    }
}

pub fn category_view(view: &CategoryView) {
    println!("{}", view.name);
    if view.posts.is_empty() {
        empty_state("No articles found in this category yet.");
        return;
    }
    for post in &view.posts {
        post_line(post);
    }
}

pub fn tag_list(tags: &[String]) {
    if tags.is_empty() {
        empty_state("No tags found.");
        return;
    }
    println!("{}", tags.join(", "));
}

pub fn empty_state(message: &str) {
    println!("{message}");
}
