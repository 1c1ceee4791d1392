use royalty_core::{CatalogRepository, CatalogService, InMemoryCatalogRepository};

#[test]
fn author_books_and_totals_follow_contract_order() {
    let mut service = CatalogService::new(InMemoryCatalogRepository::new());
    let ann = service.add_author("Ann");
    let b1 = service.add_book("B1");
    let b2 = service.add_book("B2");

    let c1 = service.sign_contract(ann, b1, "2020-01-01", 100).unwrap();
    let c2 = service.sign_contract(ann, b2, "2020-01-01", 50).unwrap();

    let books: Vec<_> = service.author_books(ann).iter().map(|b| b.id).collect();
    assert_eq!(books, vec![b1, b2]);
    assert_eq!(service.author_total_royalties(ann), 150);

    let dated: Vec<_> = service
        .contracts_by_date("2020-01-01")
        .iter()
        .map(|c| c.id())
        .collect();
    assert_eq!(dated, vec![c1, c2]);

    let authors: Vec<_> = service.book_authors(b1).iter().map(|a| a.id).collect();
    assert_eq!(authors, vec![ann]);
}

#[test]
fn repeated_pairs_are_deduplicated_by_identity() {
    let mut service = CatalogService::new(InMemoryCatalogRepository::new());
    let ann = service.add_author("Ann");
    let namesake = service.add_author("Ann");
    let book = service.add_book("Shared");
    let later = service.add_book("Later");

    service.sign_contract(ann, book, "2019", 1).unwrap();
    service.sign_contract(ann, later, "2020", 2).unwrap();
    service.sign_contract(ann, book, "2021", 3).unwrap();
    service.sign_contract(namesake, book, "2021", 4).unwrap();

    assert_eq!(service.author_contracts(ann).len(), 3);
    let books: Vec<_> = service.author_books(ann).iter().map(|b| b.id).collect();
    assert_eq!(books, vec![book, later]);

    assert_eq!(service.book_contracts(book).len(), 3);
    let authors: Vec<_> = service.book_authors(book).iter().map(|a| a.id).collect();
    assert_eq!(authors, vec![ann, namesake]);
}

#[test]
fn author_without_contracts_has_empty_relations() {
    let mut service = CatalogService::new(InMemoryCatalogRepository::new());
    let busy = service.add_author("Busy");
    let idle = service.add_author("Idle");
    let book = service.add_book("B");
    service.sign_contract(busy, book, "2020", 7).unwrap();

    assert!(service.author_contracts(idle).is_empty());
    assert!(service.author_books(idle).is_empty());
    assert_eq!(service.author_total_royalties(idle), 0);
}

#[test]
fn total_royalties_sums_signed_amounts_without_overflow() {
    let mut service = CatalogService::new(InMemoryCatalogRepository::new());
    let ann = service.add_author("Ann");
    let other = service.add_author("Other");
    let book = service.add_book("B");

    service.sign_contract(ann, book, "a", i64::MAX).unwrap();
    service.sign_contract(ann, book, "b", i64::MAX).unwrap();
    service.sign_contract(ann, book, "c", -10).unwrap();
    service.sign_contract(other, book, "d", 1_000).unwrap();

    assert_eq!(
        service.author_total_royalties(ann),
        2 * i128::from(i64::MAX) - 10
    );
    assert_eq!(service.author_total_royalties(other), 1_000);
}

#[test]
fn contracts_by_date_is_exact_and_case_sensitive() {
    let mut service = CatalogService::new(InMemoryCatalogRepository::new());
    let ann = service.add_author("Ann");
    let book = service.add_book("B");
    let upper = service.sign_contract(ann, book, "Jan 1", 1).unwrap();
    service.sign_contract(ann, book, "jan 1", 2).unwrap();
    service.sign_contract(ann, book, "Jan 1 ", 3).unwrap();

    let matched: Vec<_> = service.contracts_by_date("Jan 1").iter().map(|c| c.id()).collect();
    assert_eq!(matched, vec![upper]);
    assert!(service.contracts_by_date("2020-01-01").is_empty());
}

#[test]
fn registries_keep_creation_order() {
    let mut repo = InMemoryCatalogRepository::new();
    let names = ["c", "a", "b"];
    let ids: Vec<_> = names.iter().map(|name| repo.create_author(name)).collect();
    let titles = ["Z", "Y"];
    let book_ids: Vec<_> = titles.iter().map(|title| repo.create_book(title)).collect();

    let stored: Vec<_> = repo.authors().iter().map(|a| (a.id, a.name.as_str())).collect();
    assert_eq!(stored, vec![(ids[0], "c"), (ids[1], "a"), (ids[2], "b")]);
    let stored: Vec<_> = repo.books().iter().map(|b| b.id).collect();
    assert_eq!(stored, book_ids);
}
