#![allow(dead_code)]

use std::path::Path;

use exifpro_core::meta::{MetadataRecord, TagEntry, TagGroup, TagValue};

/// A record shaped like typical camera output, groups in extractor order.
pub fn camera_record() -> MetadataRecord {
    let mut gps = TagGroup::new("gps");
    gps.push(TagEntry::new(
        "GPSLatitude",
        Some(0x0002),
        TagValue::List(vec![
            TagValue::Rational { num: 35, denom: 1 },
            TagValue::Rational { num: 41, denom: 1 },
            TagValue::Rational { num: 0, denom: 1 },
        ]),
    ));

    let mut exif = TagGroup::new("exif");
    exif.push(TagEntry::new("FNumber", Some(0x829d), TagValue::Rational { num: 28, denom: 10 }));
    exif.push(TagEntry::new("ExposureTime", Some(0x829a), TagValue::Rational { num: 1, denom: 200 }));
    exif.push(TagEntry::new("PhotographicSensitivity", Some(0x8827), TagValue::Integer(400)));
    exif.push(TagEntry::new("MakerNote", Some(0x927c), TagValue::Binary(vec![1, 2, 3])));

    let mut ifd0 = TagGroup::new("ifd0");
    ifd0.push(TagEntry::new("Make", Some(0x010f), TagValue::text("Canon")));
    ifd0.push(TagEntry::new("Model", Some(0x0110), TagValue::text("Canon EOS R5")));
    ifd0.push(TagEntry::new("Orientation", Some(0x0112), TagValue::Integer(6)));
    ifd0.push(TagEntry::new("Artist", Some(0x013b), TagValue::text("cafÃ©")));

    let mut dc = TagGroup::new("dc");
    dc.push(TagEntry::new("creator", None, TagValue::text("someone")));

    let mut thumb = TagGroup::new("thumbnail");
    thumb.push(TagEntry::new("Width", None, TagValue::Integer(160)));

    MetadataRecord::Grouped(vec![gps, dc, exif, thumb, ifd0])
}

/// Write a small solid-colour PNG and return its path.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 80, 40]));
    img.save(&path).unwrap();
    path
}

/// Write a small JPEG carrying `xmp` in an APP1 segment right after SOI.
pub fn write_jpeg_with_xmp(dir: &Path, name: &str, xmp: &str) -> std::path::PathBuf {
    const XMP_NAMESPACE: &[u8] = b"http://ns.adobe.com/xap/1.0/\0";

    let path = dir.join(name);
    let img = image::RgbImage::from_pixel(16, 16, image::Rgb([120, 80, 40]));
    let mut encoded = std::io::Cursor::new(Vec::new());
    img.write_to(&mut encoded, image::ImageFormat::Jpeg).unwrap();
    let encoded = encoded.into_inner();

    let payload_len = 2 + XMP_NAMESPACE.len() + xmp.len();
    let mut bytes = encoded[..2].to_vec();
    bytes.extend_from_slice(&[0xFF, 0xE1]);
    bytes.extend_from_slice(&u16::try_from(payload_len).unwrap().to_be_bytes());
    bytes.extend_from_slice(XMP_NAMESPACE);
    bytes.extend_from_slice(xmp.as_bytes());
    bytes.extend_from_slice(&encoded[2..]);

    std::fs::write(&path, bytes).unwrap();
    path
}

/// A packet in the shape cameras and editors write.
pub const SAMPLE_XMP: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/" x:xmptk="XMP Core 6.0.0">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
    xmlns:xmp="http://ns.adobe.com/xap/1.0/"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:photoshop="http://ns.adobe.com/photoshop/1.0/"
    xmp:CreatorTool="Darktable 4.6"
    xmp:Rating="4"
    photoshop:City="Lisbon">
   <dc:creator>
    <rdf:Seq>
     <rdf:li>Ana &amp; Rui</rdf:li>
    </rdf:Seq>
   </dc:creator>
   <dc:subject>
    <rdf:Bag>
     <rdf:li>harbour</rdf:li>
     <rdf:li>sunset</rdf:li>
    </rdf:Bag>
   </dc:subject>
   <xmp:CreateDate>2024-05-01T12:30:45</xmp:CreateDate>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;
