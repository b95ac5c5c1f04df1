//! Generated asset table.
//!
//! Produced by the asset generator from `web_assets/`; regenerate instead of
//! editing by hand. Payloads use the format described in [`crate::registry::codec`].

use crate::registry::Registry;

const INDEX_HTML: &str = "\
H4sIAAAAAAAC/9RXX3PbNhJ/16fYQ3NH6mSSkmXHjiyq47NSx+mlzsl2OrlOHkBwRUImAQYA9acef/cb\
kJRM2clNH1s92MDuYnd/+1capybPJh2AcY6GAkup0mhCcnVz7Z2eHr/xBuSJK2iOIVlyXBVSGQJMCoPC\
hGTFY5OGMS45Q6+6HAAX3HCaeZrRDMOB3z+AnK55XuZtUqlRVXcaZRj2a2Mp0tgeAMaGmwwn76SZXU/B\
gxmPUcO1gCnmVMTjoObXspopXhjQioUkNabQoyBgMkZ/8bVEtfGZzIP66A39gT/wcy78hSaTcVA/bfRk\
XNyDwiwk2mwy1CmiIZAqnD/pzemaxcKPpDTaKFrYi9W/IwRDf+ifBEzrJ1plkGlNgAuDieJmExKd0uHp\
kfevT585v7n6CX8exJf5+9n5/YaV787fzZLh4XV+x1arEymGs89xcvSJ9j7mN7f69+Dn16fLKH67SI9K\
AkxJraXiCRchoUKKTS5LTf5PcP4oiMVzDItvQrhlx1f/4VH/8OTrcrO4+TB/t7j+QP99Py9//bT+7/ru\
o7h4f36SHeYXv/5yVVy+yS8vpqery1+u2Mfpye2afh/CU4IaMDYvk45fljyGB8ipSrjwjCxGMDgu1mfw\
2PFTaZSMvag0Rgp4gILGMRfJCA77VoKVSks1gkJaIOpsX0n/W0pGqVyigoeXb+c8M6hGECmepEag1u7p\
8d+7VsUPjYpMJt/x9AfDi++wKrBBg9Z2RrBtjXEk402T2pgvgWVU65DYjqRcoGrSvs+twkUzVKb+63Ex\
lza6MV/u5BlaTNur7caB7T+Y+df+1B8H6aDNO5qMMZ+8aEvMJ+MgPWpJttxQckWeOC8hZF4ee0OwB517\
r5/J1gVQUPGCaj+NksgIiIyoAFaHKJPsHvbSSb6pIKaGeqzURuaoQjI4HJLJjLIUM0fDT5lUNIMpap4I\
PQ6sG8+QtGP5Zwc3fHNIJrdK5nCRSiYzajiqvzyqk+GATN7TggrUaHOlUZm/frKOX5+QyXlOf+cigQs5\
nyPCTFJtUP0RcM+vFiePQ2J4QSYXGWf3IAVszVWrHmgklwhGglQxKqDAqPK/p+hpzpEt9gxp/Hy8BO35\
smONg3qedXabatLpzEvBDJcC5lLl1ExLRe3VjZtDFx46AEuqIIYQtlQIwB30qw/8Ewb1v9f97lkjWwpu\
NITg5Fw4lqjQlErAB2pSX8lSxG7chV4td9Z57HTsK5ZxFObu7moKYVu0PlIRy9ztNvasLfsmo9rM8GuJ\
2lTP+medziuXVFuLdH37zcsln2WpYIVRY8HRwOOR3XBKimRCoNc23QNi10HN6jbq9kup6zObTHcbPBeX\
pg7Unju93jYequXhvinPWt97tX0zV6jTC6oghFfuK5e0lhzp+oXCAkXsOu1mqp54jCpSbYwp1wU1LLXF\
XNeV7/+m8OsInN7Oo57zpVkltkycrs9SnsUKhdv9rf9ll9Fd0YaAS+MbqhI0vm0fjcbfcq203Z6obPYf\
mnp0FhQTVF5Ek4Qm6IzA0ag1lyJ0nsfeOdgGq+Lt3OwAPFrtTAotM/QzmbiNpZ2PEc6lQghhSg36Qq5c\
mz6AIIA7jfYbhUJh4G52BVRDRDUW1KS28oEu6HprTDfqLPOjwjlfQwgrLmK58jPJqgbwLdP2r7W9J9i6\
/C0EEhD4sU0bgeNUTr3yrU23xeqBE8RNyn7czaQqQtvg98D5h5BCY0Xe64uDJtxNUEbbw0FFzdGkMh6B\
c/n21qlJumQMtR7BroptNg/A4NrcGGpK3d1l0IaDzk2V/nZwmyncyonVsWNUY2M7MsIXI4Ya6r+9Pd+J\
byu+7lqn+UEyjiYWbCU9VXxZh2EcRBOgSvGlrW4uoJLZ2uqBA02lt4uorq+MGhRsU/PcCpZXl44dSU6u\
vziNS482Uo/ds85jXUitr8jjoP5R978AAAD//wouYFDcDQAA";

/// Build the registry of generated assets.
pub fn registry() -> Registry {
    Registry::builder()
        .file(
            "/index.html",
            "web_assets/index.html",
            3548,
            1_576_748_870,
            INDEX_HTML,
        )
        .dir("/", "web_assets")
        .listing("web_assets", ["/index.html"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_entries() {
        let registry = registry();
        assert_eq!(registry.len(), 2);

        let index = registry.get("/index.html").unwrap();
        assert_eq!(index.size(), 3548);
        assert_eq!(index.local(), "web_assets/index.html");
        assert_eq!(index.mod_time().timestamp(), 1_576_748_870);

        let root = registry.get("/").unwrap();
        assert!(root.is_dir());
        assert_eq!(root.local(), "web_assets");
    }

    #[test]
    fn test_generated_payload_decodes_to_declared_size() {
        let registry = registry();
        let index = registry.get("/index.html").unwrap();
        assert_eq!(index.materialize().unwrap().len() as u64, index.size());
    }
}
