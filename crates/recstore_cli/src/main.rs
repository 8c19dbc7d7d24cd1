//! CLI demo entry point.
//!
//! # Responsibility
//! - Exercise the core store end to end from an external caller.
//! - Keep output deterministic for quick local sanity checks.

use recstore_core::{
    distinct_by, group_sum, sum_by, top_group, Address, CartService, Contact, ContactPatch,
    ContactService, Order, Product, RecordStore,
};

fn main() {
    println!("recstore_core version={}", recstore_core::core_version());

    contact_demo();
    cart_demo();
    sales_demo();
}

fn contact_demo() {
    println!("\n== contacts ==");
    let mut contacts = ContactService::new();
    let ali = contacts.create_contact(
        Contact::new("Ali Khan", "0300-1111111")
            .with_tags(vec!["friend".to_string()])
            .with_address(Address::new("Lahore", "54000")),
    );
    let sara = contacts.create_contact(Contact::new("Sara Ahmed", "0300-2222222"));

    if let Some(updated) = contacts.update_contact(
        ali,
        ContactPatch {
            phone: Some("0300-9999999".to_string()),
            ..ContactPatch::default()
        },
    ) {
        println!("updated id={} phone={}", updated.id, updated.phone);
    }
    for hit in contacts.find_by_name("ali") {
        println!("hit id={} name={} phone={}", hit.id, hit.name, hit.phone);
    }

    println!("delete sara={}", contacts.delete_contact(sara));
    match contacts.export_json() {
        Ok(snapshot) => println!("snapshot bytes={}", snapshot.len()),
        Err(err) => println!("export failed: {err}"),
    }
}

fn cart_demo() {
    println!("\n== cart ==");
    let mut cart = CartService::new(vec![
        Product::new("p1", "T-shirt", 15.0),
        Product::new("p2", "Sneakers", 60.0),
        Product::new("p3", "Cap", 10.0),
    ]);
    cart.add_item("p1", 2);
    cart.add_item("p2", 1);
    cart.add_item("p1", 1);
    cart.update_quantity("p2", 3);

    for line in cart.lines() {
        let name = cart
            .product(&line.product_id)
            .map_or("UNKNOWN", |p| p.name.as_str());
        println!(
            "{} x {} @ {} = {}",
            name,
            line.qty,
            line.price_at_add,
            line.subtotal()
        );
    }
    println!("total={}", cart.total());
}

fn sales_demo() {
    println!("\n== sales ==");
    let mut sales = RecordStore::new();
    sales.create(Order::new("T-shirt", 2, 15.0, "North"));
    sales.create(Order::new("Sneakers", 1, 60.0, "South"));
    sales.create(Order::new("T-shirt", 1, 15.0, "East"));
    sales.create(Order::new("Cap", 3, 10.0, "North"));
    sales.create(Order::new("T-shirt", 5, 15.0, "South"));

    println!("total revenue={}", sum_by(sales.records(), Order::subtotal));
    for (product, revenue) in group_sum(sales.records(), |o| o.product.clone(), Order::subtotal) {
        println!("revenue product={product} amount={revenue}");
    }
    if let Some((product, revenue)) =
        top_group(group_sum(sales.records(), |o| o.product.clone(), Order::subtotal))
    {
        println!("top product={product} revenue={revenue}");
    }
    println!(
        "unique products={:?}",
        distinct_by(sales.records(), |o| o.product.clone())
    );
}
