//! Literal IANA media type table.
//!
//! One row per registered type: canonical lowercase key, the subtype as the
//! registry spells it, the top-level category and common file extensions.
//! Rows are sorted by key; `registry::lookup` binary-searches this slice.

use super::KnownType;
use crate::models::category::Category::*;

#[rustfmt::skip]
pub(super) static TYPES: &[KnownType] = &[
    KnownType::new("application/1d-interleaved-parityfec", "1d-interleaved-parityfec", Application, &[]),
    KnownType::new("application/3gpdash-qoe-report+xml", "3gpdash-qoe-report+xml", Application, &[]),
    KnownType::new("application/3gpp-ims+xml", "3gpp-ims+xml", Application, &[]),
    KnownType::new("application/3gpphal+json", "3gppHal+json", Application, &[]),
    KnownType::new("application/3gpphalforms+json", "3gppHalForms+json", Application, &[]),
    KnownType::new("application/a2l", "A2L", Application, &["a2l"]),
    KnownType::new("application/ace+cbor", "ace+cbor", Application, &[]),
    KnownType::new("application/ace+json", "ace+json", Application, &[]),
    KnownType::new("application/activemessage", "activemessage", Application, &[]),
    KnownType::new("application/activity+json", "activity+json", Application, &[]),
    KnownType::new("application/aif+cbor", "aif+cbor", Application, &[]),
    KnownType::new("application/aif+json", "aif+json", Application, &[]),
    KnownType::new("application/alto-cdni+json", "alto-cdni+json", Application, &[]),
    KnownType::new("application/alto-cdnifilter+json", "alto-cdnifilter+json", Application, &[]),
    KnownType::new("application/alto-costmap+json", "alto-costmap+json", Application, &[]),
    KnownType::new("application/alto-costmapfilter+json", "alto-costmapfilter+json", Application, &[]),
    KnownType::new("application/alto-directory+json", "alto-directory+json", Application, &[]),
    KnownType::new("application/alto-endpointcost+json", "alto-endpointcost+json", Application, &[]),
    KnownType::new("application/alto-endpointcostparams+json", "alto-endpointcostparams+json", Application, &[]),
    KnownType::new("application/alto-endpointprop+json", "alto-endpointprop+json", Application, &[]),
    KnownType::new("application/alto-endpointpropparams+json", "alto-endpointpropparams+json", Application, &[]),
    KnownType::new("application/alto-error+json", "alto-error+json", Application, &[]),
    KnownType::new("application/alto-networkmap+json", "alto-networkmap+json", Application, &[]),
    KnownType::new("application/alto-networkmapfilter+json", "alto-networkmapfilter+json", Application, &[]),
    KnownType::new("application/alto-propmap+json", "alto-propmap+json", Application, &[]),
    KnownType::new("application/alto-propmapparams+json", "alto-propmapparams+json", Application, &[]),
    KnownType::new("application/alto-updatestreamcontrol+json", "alto-updatestreamcontrol+json", Application, &[]),
    KnownType::new("application/alto-updatestreamparams+json", "alto-updatestreamparams+json", Application, &[]),
    KnownType::new("application/aml", "AML", Application, &["aml"]),
    KnownType::new("application/andrew-inset", "andrew-inset", Application, &["ez"]),
    KnownType::new("application/annodex", "annodex", Application, &["anx"]),
    KnownType::new("application/applefile", "applefile", Application, &[]),
    KnownType::new("application/at+jwt", "at+jwt", Application, &[]),
    KnownType::new("application/atf", "ATF", Application, &["atf"]),
    KnownType::new("application/atfx", "ATFX", Application, &["atfx"]),
    KnownType::new("application/atom+xml", "atom+xml", Application, &["atom"]),
    KnownType::new("application/atomcat+xml", "atomcat+xml", Application, &["atomcat"]),
    KnownType::new("application/atomdeleted+xml", "atomdeleted+xml", Application, &["atomdeleted"]),
    KnownType::new("application/atomicmail", "atomicmail", Application, &[]),
    KnownType::new("application/atomserv+xml", "atomserv+xml", Application, &["atomsrv"]),
    KnownType::new("application/atomsvc+xml", "atomsvc+xml", Application, &["atomsvc"]),
    KnownType::new("application/atsc-dwd+xml", "atsc-dwd+xml", Application, &["dwd"]),
    KnownType::new("application/atsc-dynamic-event-message", "atsc-dynamic-event-message", Application, &[]),
    KnownType::new("application/atsc-held+xml", "atsc-held+xml", Application, &["held"]),
    KnownType::new("application/atsc-rdt+json", "atsc-rdt+json", Application, &[]),
    KnownType::new("application/atsc-rsat+xml", "atsc-rsat+xml", Application, &["rsat"]),
    KnownType::new("application/atxml", "ATXML", Application, &["atxml"]),
    KnownType::new("application/auth-policy+xml", "auth-policy+xml", Application, &["apxml"]),
    KnownType::new("application/automationml-aml+xml", "automationml-aml+xml", Application, &[]),
    KnownType::new("application/automationml-amlx+zip", "automationml-amlx+zip", Application, &["amlx"]),
    KnownType::new("application/bacnet-xdd+zip", "bacnet-xdd+zip", Application, &["xdd"]),
    KnownType::new("application/batch-smtp", "batch-SMTP", Application, &[]),
    KnownType::new("application/bbolin", "bbolin", Application, &["lin"]),
    KnownType::new("application/beep+xml", "beep+xml", Application, &[]),
    KnownType::new("application/calendar+json", "calendar+json", Application, &[]),
    KnownType::new("application/calendar+xml", "calendar+xml", Application, &["xcs"]),
    KnownType::new("application/call-completion", "call-completion", Application, &[]),
    KnownType::new("application/cals-1840", "CALS-1840", Application, &[]),
    KnownType::new("application/captive+json", "captive+json", Application, &[]),
    KnownType::new("application/cbor", "cbor", Application, &["cbor"]),
    KnownType::new("application/cbor-seq", "cbor-seq", Application, &[]),
    KnownType::new("application/cccex", "cccex", Application, &["c3ex"]),
    KnownType::new("application/ccmp+xml", "ccmp+xml", Application, &["ccmp"]),
    KnownType::new("application/ccxml+xml", "ccxml+xml", Application, &["ccxml"]),
    KnownType::new("application/cda+xml", "cda+xml", Application, &[]),
    KnownType::new("application/cdfx+xml", "CDFX+XML", Application, &["cdfx"]),
    KnownType::new("application/cdmi-capability", "cdmi-capability", Application, &["cdmia"]),
    KnownType::new("application/cdmi-container", "cdmi-container", Application, &["cdmic"]),
    KnownType::new("application/cdmi-domain", "cdmi-domain", Application, &["cdmid"]),
    KnownType::new("application/cdmi-object", "cdmi-object", Application, &["cdmio"]),
    KnownType::new("application/cdmi-queue", "cdmi-queue", Application, &["cdmiq"]),
    KnownType::new("application/cdni", "cdni", Application, &[]),
    KnownType::new("application/cea", "CEA", Application, &["cea"]),
    KnownType::new("application/cea-2018+xml", "cea-2018+xml", Application, &[]),
    KnownType::new("application/cellml+xml", "cellml+xml", Application, &["cellml", "cml"]),
    KnownType::new("application/cfw", "cfw", Application, &[]),
    KnownType::new("application/city+json", "city+json", Application, &[]),
    KnownType::new("application/clr", "clr", Application, &["1clr"]),
    KnownType::new("application/clue+xml", "clue+xml", Application, &[]),
    KnownType::new("application/clue_info+xml", "clue_info+xml", Application, &["clue"]),
    KnownType::new("application/cms", "cms", Application, &["cmsc"]),
    KnownType::new("application/cnrp+xml", "cnrp+xml", Application, &[]),
    KnownType::new("application/coap-group+json", "coap-group+json", Application, &[]),
    KnownType::new("application/coap-payload", "coap-payload", Application, &[]),
    KnownType::new("application/commonground", "commonground", Application, &[]),
    KnownType::new("application/concise-problem-details+cbor", "concise-problem-details+cbor", Application, &[]),
    KnownType::new("application/conference-info+xml", "conference-info+xml", Application, &[]),
    KnownType::new("application/cose", "cose", Application, &[]),
    KnownType::new("application/cose-key", "cose-key", Application, &[]),
    KnownType::new("application/cose-key-set", "cose-key-set", Application, &[]),
    KnownType::new("application/cose-x509", "cose-x509", Application, &[]),
    KnownType::new("application/cpl+xml", "cpl+xml", Application, &["cpl"]),
    KnownType::new("application/csrattrs", "csrattrs", Application, &["csrattrs"]),
    KnownType::new("application/csta+xml", "csta+xml", Application, &[]),
    KnownType::new("application/cstadata+xml", "CSTAdata+xml", Application, &[]),
    KnownType::new("application/csvm+json", "csvm+json", Application, &[]),
    KnownType::new("application/cu-seeme", "cu-seeme", Application, &["cu"]),
    KnownType::new("application/cwl", "cwl", Application, &["cwl"]),
    KnownType::new("application/cwl+json", "cwl+json", Application, &["cwl.json"]),
    KnownType::new("application/cwt", "cwt", Application, &[]),
    KnownType::new("application/cybercash", "cybercash", Application, &[]),
    KnownType::new("application/dash+xml", "dash+xml", Application, &["mpd"]),
    KnownType::new("application/dash-patch+xml", "dash-patch+xml", Application, &[]),
    KnownType::new("application/dashdelta", "dashdelta", Application, &["mpdd"]),
    KnownType::new("application/davmount+xml", "davmount+xml", Application, &["davmount"]),
    KnownType::new("application/dca-rft", "dca-rft", Application, &[]),
    KnownType::new("application/dcd", "DCD", Application, &["dcd"]),
    KnownType::new("application/dec-dx", "dec-dx", Application, &[]),
    KnownType::new("application/dialog-info+xml", "dialog-info+xml", Application, &[]),
    KnownType::new("application/dicom", "dicom", Application, &["dcm"]),
    KnownType::new("application/dicom+json", "dicom+json", Application, &[]),
    KnownType::new("application/dicom+xml", "dicom+xml", Application, &[]),
    KnownType::new("application/dii", "DII", Application, &["dii"]),
    KnownType::new("application/dit", "DIT", Application, &["dit"]),
    KnownType::new("application/dns", "dns", Application, &[]),
    KnownType::new("application/dns+json", "dns+json", Application, &[]),
    KnownType::new("application/dns-message", "dns-message", Application, &[]),
    KnownType::new("application/dots+cbor", "dots+cbor", Application, &[]),
    KnownType::new("application/dskpp+xml", "dskpp+xml", Application, &["xmls"]),
    KnownType::new("application/dsptype", "dsptype", Application, &["tsp"]),
    KnownType::new("application/dssc+der", "dssc+der", Application, &["dssc"]),
    KnownType::new("application/dssc+xml", "dssc+xml", Application, &["xdssc"]),
    KnownType::new("application/dvcs", "dvcs", Application, &["dvc"]),
    KnownType::new("application/edi-consent", "EDI-consent", Application, &[]),
    KnownType::new("application/edi-x12", "EDI-X12", Application, &[]),
    KnownType::new("application/edifact", "EDIFACT", Application, &[]),
    KnownType::new("application/efi", "efi", Application, &["efi"]),
    KnownType::new("application/elm+json", "elm+json", Application, &[]),
    KnownType::new("application/elm+xml", "elm+xml", Application, &[]),
    KnownType::new("application/emergencycalldata.cap+xml", "EmergencyCallData.cap+xml", Application, &[]),
    KnownType::new("application/emergencycalldata.comment+xml", "EmergencyCallData.Comment+xml", Application, &[]),
    KnownType::new("application/emergencycalldata.control+xml", "EmergencyCallData.Control+xml", Application, &[]),
    KnownType::new("application/emergencycalldata.deviceinfo+xml", "EmergencyCallData.DeviceInfo+xml", Application, &[]),
    KnownType::new("application/emergencycalldata.ecall.msd", "EmergencyCallData.eCall.MSD", Application, &[]),
    KnownType::new("application/emergencycalldata.legacyesn+json", "EmergencyCallData.LegacyESN+json", Application, &[]),
    KnownType::new("application/emergencycalldata.providerinfo+xml", "EmergencyCallData.ProviderInfo+xml", Application, &[]),
    KnownType::new("application/emergencycalldata.serviceinfo+xml", "EmergencyCallData.ServiceInfo+xml", Application, &[]),
    KnownType::new("application/emergencycalldata.subscriberinfo+xml", "EmergencyCallData.SubscriberInfo+xml", Application, &[]),
    KnownType::new("application/emergencycalldata.veds+xml", "EmergencyCallData.VEDS+xml", Application, &[]),
    KnownType::new("application/emma+xml", "emma+xml", Application, &["emma"]),
    KnownType::new("application/emotionml+xml", "emotionml+xml", Application, &["emotionml"]),
    KnownType::new("application/encaprtp", "encaprtp", Application, &[]),
    KnownType::new("application/epp+xml", "epp+xml", Application, &[]),
    KnownType::new("application/epub+zip", "epub+zip", Application, &["epub"]),
    KnownType::new("application/eshop", "eshop", Application, &[]),
    KnownType::new("application/example", "example", Application, &[]),
    KnownType::new("application/exi", "exi", Application, &["exi"]),
    KnownType::new("application/expect-ct-report+json", "expect-ct-report+json", Application, &[]),
    KnownType::new("application/express", "express", Application, &["exp"]),
    KnownType::new("application/fastinfoset", "fastinfoset", Application, &["finf"]),
    KnownType::new("application/fastsoap", "fastsoap", Application, &[]),
    KnownType::new("application/fdf", "fdf", Application, &["fdf"]),
    KnownType::new("application/fdt+xml", "fdt+xml", Application, &["fdt"]),
    KnownType::new("application/fhir+json", "fhir+json", Application, &[]),
    KnownType::new("application/fhir+xml", "fhir+xml", Application, &[]),
    KnownType::new("application/fits", "fits", Application, &[]),
    KnownType::new("application/flexfec", "flexfec", Application, &[]),
    KnownType::new("application/font-tdpfr", "font-tdpfr", Application, &["pfr"]),
    KnownType::new("application/framework-attributes+xml", "framework-attributes+xml", Application, &[]),
    KnownType::new("application/futuresplash", "futuresplash", Application, &["spl"]),
    KnownType::new("application/geo+json", "geo+json", Application, &["geojson"]),
    KnownType::new("application/geo+json-seq", "geo+json-seq", Application, &[]),
    KnownType::new("application/geopackage+sqlite3", "geopackage+sqlite3", Application, &["gpkg"]),
    KnownType::new("application/geoxacml+xml", "geoxacml+xml", Application, &[]),
    KnownType::new("application/gltf-buffer", "gltf-buffer", Application, &["glbin", "glbuf"]),
    KnownType::new("application/gml+xml", "gml+xml", Application, &["gml"]),
    KnownType::new("application/gzip", "gzip", Application, &["gz"]),
    KnownType::new("application/h224", "H224", Application, &[]),
    KnownType::new("application/held+xml", "held+xml", Application, &[]),
    KnownType::new("application/hl7v2+xml", "hl7v2+xml", Application, &[]),
    KnownType::new("application/hta", "hta", Application, &["hta"]),
    KnownType::new("application/http", "http", Application, &[]),
    KnownType::new("application/hyperstudio", "hyperstudio", Application, &["stk"]),
    KnownType::new("application/ibe-key-request+xml", "ibe-key-request+xml", Application, &[]),
    KnownType::new("application/ibe-pkg-reply+xml", "ibe-pkg-reply+xml", Application, &[]),
    KnownType::new("application/ibe-pp-data", "ibe-pp-data", Application, &[]),
    KnownType::new("application/iges", "iges", Application, &[]),
    KnownType::new("application/im-iscomposing+xml", "im-iscomposing+xml", Application, &[]),
    KnownType::new("application/index", "index", Application, &[]),
    KnownType::new("application/index.cmd", "index.cmd", Application, &[]),
    KnownType::new("application/index.obj", "index.obj", Application, &[]),
    KnownType::new("application/index.response", "index.response", Application, &[]),
    KnownType::new("application/index.vnd", "index.vnd", Application, &[]),
    KnownType::new("application/inkml+xml", "inkml+xml", Application, &["ink", "inkml"]),
    KnownType::new("application/iotp", "IOTP", Application, &[]),
    KnownType::new("application/ipfix", "ipfix", Application, &["ipfix"]),
    KnownType::new("application/ipp", "ipp", Application, &[]),
    KnownType::new("application/isup", "ISUP", Application, &[]),
    KnownType::new("application/its+xml", "its+xml", Application, &["its"]),
    KnownType::new("application/java-archive", "java-archive", Application, &["jar"]),
    KnownType::new("application/java-serialized-object", "java-serialized-object", Application, &["ser"]),
    KnownType::new("application/java-vm", "java-vm", Application, &["class"]),
    KnownType::new("application/jf2feed+json", "jf2feed+json", Application, &[]),
    KnownType::new("application/jose", "jose", Application, &[]),
    KnownType::new("application/jose+json", "jose+json", Application, &[]),
    KnownType::new("application/jrd+json", "jrd+json", Application, &["jrd"]),
    KnownType::new("application/jscalendar+json", "jscalendar+json", Application, &[]),
    KnownType::new("application/json", "json", Application, &["json"]),
    KnownType::new("application/json-patch+json", "json-patch+json", Application, &["json-patch"]),
    KnownType::new("application/json-seq", "json-seq", Application, &[]),
    KnownType::new("application/jwk+json", "jwk+json", Application, &[]),
    KnownType::new("application/jwk-set+json", "jwk-set+json", Application, &[]),
    KnownType::new("application/jwt", "jwt", Application, &[]),
    KnownType::new("application/kpml-request+xml", "kpml-request+xml", Application, &[]),
    KnownType::new("application/kpml-response+xml", "kpml-response+xml", Application, &[]),
    KnownType::new("application/ld+json", "ld+json", Application, &["jsonld"]),
    KnownType::new("application/lgr+xml", "lgr+xml", Application, &["lgr"]),
    KnownType::new("application/link-format", "link-format", Application, &["wlnk"]),
    KnownType::new("application/linkset", "linkset", Application, &[]),
    KnownType::new("application/linkset+json", "linkset+json", Application, &[]),
    KnownType::new("application/load-control+xml", "load-control+xml", Application, &[]),
    KnownType::new("application/logout+jwt", "logout+jwt", Application, &[]),
    KnownType::new("application/lost+xml", "lost+xml", Application, &["lostxml"]),
    KnownType::new("application/lostsync+xml", "lostsync+xml", Application, &["lostsyncxml"]),
    KnownType::new("application/lpf+zip", "lpf+zip", Application, &["lpf"]),
    KnownType::new("application/lxf", "LXF", Application, &["lxf"]),
    KnownType::new("application/m3g", "m3g", Application, &["m3g"]),
    KnownType::new("application/mac-binhex40", "mac-binhex40", Application, &["hqx"]),
    KnownType::new("application/mac-compactpro", "mac-compactpro", Application, &["cpt"]),
    KnownType::new("application/macwriteii", "macwriteii", Application, &[]),
    KnownType::new("application/mads+xml", "mads+xml", Application, &["mads"]),
    KnownType::new("application/manifest+json", "manifest+json", Application, &["webmanifest"]),
    KnownType::new("application/marc", "marc", Application, &["mrc"]),
    KnownType::new("application/marcxml+xml", "marcxml+xml", Application, &["mrcx"]),
    KnownType::new("application/mathematica", "mathematica", Application, &["ma", "mb"]),
    KnownType::new("application/mathml+xml", "mathml+xml", Application, &["mml"]),
    KnownType::new("application/mathml-content+xml", "mathml-content+xml", Application, &[]),
    KnownType::new("application/mathml-presentation+xml", "mathml-presentation+xml", Application, &[]),
    KnownType::new("application/mbms-associated-procedure-description+xml", "mbms-associated-procedure-description+xml", Application, &[]),
    KnownType::new("application/mbms-deregister+xml", "mbms-deregister+xml", Application, &[]),
    KnownType::new("application/mbms-envelope+xml", "mbms-envelope+xml", Application, &[]),
    KnownType::new("application/mbms-msk+xml", "mbms-msk+xml", Application, &[]),
    KnownType::new("application/mbms-msk-response+xml", "mbms-msk-response+xml", Application, &[]),
    KnownType::new("application/mbms-protection-description+xml", "mbms-protection-description+xml", Application, &[]),
    KnownType::new("application/mbms-reception-report+xml", "mbms-reception-report+xml", Application, &[]),
    KnownType::new("application/mbms-register+xml", "mbms-register+xml", Application, &[]),
    KnownType::new("application/mbms-register-response+xml", "mbms-register-response+xml", Application, &[]),
    KnownType::new("application/mbms-schedule+xml", "mbms-schedule+xml", Application, &[]),
    KnownType::new("application/mbms-user-service-description+xml", "mbms-user-service-description+xml", Application, &[]),
    KnownType::new("application/mbox", "mbox", Application, &["mbox"]),
    KnownType::new("application/media-policy-dataset+xml", "media-policy-dataset+xml", Application, &[]),
    KnownType::new("application/media_control+xml", "media_control+xml", Application, &[]),
    KnownType::new("application/mediaservercontrol+xml", "mediaservercontrol+xml", Application, &[]),
    KnownType::new("application/merge-patch+json", "merge-patch+json", Application, &[]),
    KnownType::new("application/metalink4+xml", "metalink4+xml", Application, &["meta4"]),
    KnownType::new("application/mets+xml", "mets+xml", Application, &["mets"]),
    KnownType::new("application/mf4", "MF4", Application, &["mf4"]),
    KnownType::new("application/mikey", "mikey", Application, &[]),
    KnownType::new("application/mipc", "mipc", Application, &[]),
    KnownType::new("application/missing-blocks+cbor-seq", "missing-blocks+cbor-seq", Application, &[]),
    KnownType::new("application/mmt-aei+xml", "mmt-aei+xml", Application, &["maei"]),
    KnownType::new("application/mmt-usd+xml", "mmt-usd+xml", Application, &["musd"]),
    KnownType::new("application/mods+xml", "mods+xml", Application, &["mods"]),
    KnownType::new("application/moss-keys", "moss-keys", Application, &[]),
    KnownType::new("application/moss-signature", "moss-signature", Application, &[]),
    KnownType::new("application/mosskey-data", "mosskey-data", Application, &[]),
    KnownType::new("application/mosskey-request", "mosskey-request", Application, &[]),
    KnownType::new("application/mp21", "mp21", Application, &["m21", "mp21"]),
    KnownType::new("application/mp4", "mp4", Application, &[]),
    KnownType::new("application/mpeg4-generic", "mpeg4-generic", Application, &[]),
    KnownType::new("application/mpeg4-iod", "mpeg4-iod", Application, &[]),
    KnownType::new("application/mpeg4-iod-xmt", "mpeg4-iod-xmt", Application, &[]),
    KnownType::new("application/mrb-consumer+xml", "mrb-consumer+xml", Application, &[]),
    KnownType::new("application/mrb-publish+xml", "mrb-publish+xml", Application, &[]),
    KnownType::new("application/msaccess", "msaccess", Application, &["mdb"]),
    KnownType::new("application/msc-ivr+xml", "msc-ivr+xml", Application, &[]),
    KnownType::new("application/msc-mixer+xml", "msc-mixer+xml", Application, &[]),
    KnownType::new("application/msword", "msword", Application, &["doc"]),
    KnownType::new("application/mud+json", "mud+json", Application, &[]),
    KnownType::new("application/multipart-core", "multipart-core", Application, &[]),
    KnownType::new("application/mxf", "mxf", Application, &["mxf"]),
    KnownType::new("application/n-quads", "n-quads", Application, &["nq"]),
    KnownType::new("application/n-triples", "n-triples", Application, &["nt"]),
    KnownType::new("application/nasdata", "nasdata", Application, &[]),
    KnownType::new("application/news-checkgroups", "news-checkgroups", Application, &[]),
    KnownType::new("application/news-groupinfo", "news-groupinfo", Application, &[]),
    KnownType::new("application/news-transmission", "news-transmission", Application, &[]),
    KnownType::new("application/nlsml+xml", "nlsml+xml", Application, &[]),
    KnownType::new("application/node", "node", Application, &[]),
    KnownType::new("application/nss", "nss", Application, &[]),
    KnownType::new("application/oauth-authz-req+jwt", "oauth-authz-req+jwt", Application, &[]),
    KnownType::new("application/oblivious-dns-message", "oblivious-dns-message", Application, &[]),
    KnownType::new("application/ocsp-request", "ocsp-request", Application, &["orq"]),
    KnownType::new("application/ocsp-response", "ocsp-response", Application, &["ors"]),
    KnownType::new("application/octet-stream", "octet-stream", Application, &["bin", "deploy", "msu", "msp"]),
    KnownType::new("application/oda", "ODA", Application, &["oda"]),
    KnownType::new("application/odm+xml", "odm+xml", Application, &[]),
    KnownType::new("application/odx", "ODX", Application, &["odx"]),
    KnownType::new("application/oebps-package+xml", "oebps-package+xml", Application, &["opf"]),
    KnownType::new("application/ogg", "ogg", Application, &["ogx"]),
    KnownType::new("application/onenote", "onenote", Application, &["one", "onetoc2", "onetmp", "onepkg"]),
    KnownType::new("application/opc-nodeset+xml", "opc-nodeset+xml", Application, &[]),
    KnownType::new("application/oscore", "oscore", Application, &[]),
    KnownType::new("application/oxps", "oxps", Application, &["oxps"]),
    KnownType::new("application/p21", "p21", Application, &["p21", "stpnc", "210", "ifc"]),
    KnownType::new("application/p21+zip", "p21+zip", Application, &[]),
    KnownType::new("application/p2p-overlay+xml", "p2p-overlay+xml", Application, &["relo"]),
    KnownType::new("application/parityfec", "parityfec", Application, &[]),
    KnownType::new("application/passport", "passport", Application, &[]),
    KnownType::new("application/patch-ops-error+xml", "patch-ops-error+xml", Application, &[]),
    KnownType::new("application/pdf", "pdf", Application, &["pdf"]),
    KnownType::new("application/pdx", "PDX", Application, &["pdx"]),
    KnownType::new("application/pem-certificate-chain", "pem-certificate-chain", Application, &["pem"]),
    KnownType::new("application/pgp-encrypted", "pgp-encrypted", Application, &["pgp"]),
    KnownType::new("application/pgp-keys", "pgp-keys", Application, &["asc", "key"]),
    KnownType::new("application/pgp-signature", "pgp-signature", Application, &["sig"]),
    KnownType::new("application/pics-rules", "pics-rules", Application, &["prf"]),
    KnownType::new("application/pidf+xml", "pidf+xml", Application, &[]),
    KnownType::new("application/pidf-diff+xml", "pidf-diff+xml", Application, &[]),
    KnownType::new("application/pkcs10", "pkcs10", Application, &["p10"]),
    KnownType::new("application/pkcs12", "pkcs12", Application, &["p12", "pfx"]),
    KnownType::new("application/pkcs7-mime", "pkcs7-mime", Application, &["p7m", "p7c", "p7z"]),
    KnownType::new("application/pkcs7-signature", "pkcs7-signature", Application, &["p7s"]),
    KnownType::new("application/pkcs8", "pkcs8", Application, &["p8"]),
    KnownType::new("application/pkcs8-encrypted", "pkcs8-encrypted", Application, &["p8e"]),
    KnownType::new("application/pkix-attr-cert", "pkix-attr-cert", Application, &["ac"]),
    KnownType::new("application/pkix-cert", "pkix-cert", Application, &["cer"]),
    KnownType::new("application/pkix-crl", "pkix-crl", Application, &["crl"]),
    KnownType::new("application/pkix-pkipath", "pkix-pkipath", Application, &["pkipath"]),
    KnownType::new("application/pkixcmp", "pkixcmp", Application, &["pki"]),
    KnownType::new("application/pls+xml", "pls+xml", Application, &[]),
    KnownType::new("application/poc-settings+xml", "poc-settings+xml", Application, &[]),
    KnownType::new("application/postscript", "postscript", Application, &["ps", "ai", "eps", "epsi", "epsf", "eps2", "eps3"]),
    KnownType::new("application/ppsp-tracker+json", "ppsp-tracker+json", Application, &[]),
    KnownType::new("application/problem+json", "problem+json", Application, &[]),
    KnownType::new("application/problem+xml", "problem+xml", Application, &[]),
    KnownType::new("application/provenance+xml", "provenance+xml", Application, &["provx"]),
    KnownType::new("application/prs.alvestrand.titrax-sheet", "prs.alvestrand.titrax-sheet", Application, &[]),
    KnownType::new("application/prs.cww", "prs.cww", Application, &["cw", "cww"]),
    KnownType::new("application/prs.cyn", "prs.cyn", Application, &[]),
    KnownType::new("application/prs.hpub+zip", "prs.hpub+zip", Application, &["hpub"]),
    KnownType::new("application/prs.nprend", "prs.nprend", Application, &["rnd", "rct"]),
    KnownType::new("application/prs.plucker", "prs.plucker", Application, &[]),
    KnownType::new("application/prs.rdf-xml-crypt", "prs.rdf-xml-crypt", Application, &["rdf-crypt"]),
    KnownType::new("application/prs.xsf+xml", "prs.xsf+xml", Application, &["xsf"]),
    KnownType::new("application/pskc+xml", "pskc+xml", Application, &["pskcxml"]),
    KnownType::new("application/pvd+json", "pvd+json", Application, &[]),
    KnownType::new("application/qsig", "QSIG", Application, &[]),
    KnownType::new("application/raptorfec", "raptorfec", Application, &[]),
    KnownType::new("application/rdap+json", "rdap+json", Application, &[]),
    KnownType::new("application/rdf+xml", "rdf+xml", Application, &["rdf"]),
    KnownType::new("application/reginfo+xml", "reginfo+xml", Application, &["rif"]),
    KnownType::new("application/relax-ng-compact-syntax", "relax-ng-compact-syntax", Application, &["rnc"]),
    KnownType::new("application/reputon+json", "reputon+json", Application, &[]),
    KnownType::new("application/resource-lists+xml", "resource-lists+xml", Application, &["rl"]),
    KnownType::new("application/resource-lists-diff+xml", "resource-lists-diff+xml", Application, &["rld"]),
    KnownType::new("application/rfc+xml", "rfc+xml", Application, &["rfcxml"]),
    KnownType::new("application/riscos", "riscos", Application, &[]),
    KnownType::new("application/rlmi+xml", "rlmi+xml", Application, &[]),
    KnownType::new("application/rls-services+xml", "rls-services+xml", Application, &["rs"]),
    KnownType::new("application/route-apd+xml", "route-apd+xml", Application, &["rapd"]),
    KnownType::new("application/route-s-tsid+xml", "route-s-tsid+xml", Application, &["sls"]),
    KnownType::new("application/route-usd+xml", "route-usd+xml", Application, &["rusd"]),
    KnownType::new("application/rpki-checklist", "rpki-checklist", Application, &[]),
    KnownType::new("application/rpki-ghostbusters", "rpki-ghostbusters", Application, &["gbr"]),
    KnownType::new("application/rpki-manifest", "rpki-manifest", Application, &["mft"]),
    KnownType::new("application/rpki-publication", "rpki-publication", Application, &[]),
    KnownType::new("application/rpki-roa", "rpki-roa", Application, &["roa"]),
    KnownType::new("application/rpki-updown", "rpki-updown", Application, &[]),
    KnownType::new("application/rtf", "rtf", Application, &["rtf"]),
    KnownType::new("application/rtploopback", "rtploopback", Application, &[]),
    KnownType::new("application/rtx", "rtx", Application, &[]),
    KnownType::new("application/samlassertion+xml", "samlassertion+xml", Application, &[]),
    KnownType::new("application/samlmetadata+xml", "samlmetadata+xml", Application, &[]),
    KnownType::new("application/sarif+json", "sarif+json", Application, &["sarif", "sarif.json"]),
    KnownType::new("application/sarif-external-properties+json", "sarif-external-properties+json", Application, &["sarif-external-properties", "sarif-external-properties.json"]),
    KnownType::new("application/sbe", "sbe", Application, &[]),
    KnownType::new("application/sbml+xml", "sbml+xml", Application, &[]),
    KnownType::new("application/scaip+xml", "scaip+xml", Application, &[]),
    KnownType::new("application/scim+json", "scim+json", Application, &["scim"]),
    KnownType::new("application/scvp-cv-request", "scvp-cv-request", Application, &["scq"]),
    KnownType::new("application/scvp-cv-response", "scvp-cv-response", Application, &["scs"]),
    KnownType::new("application/scvp-vp-request", "scvp-vp-request", Application, &["spq"]),
    KnownType::new("application/scvp-vp-response", "scvp-vp-response", Application, &["spp"]),
    KnownType::new("application/sdp", "sdp", Application, &["sdp"]),
    KnownType::new("application/secevent+jwt", "secevent+jwt", Application, &[]),
    KnownType::new("application/senml+cbor", "senml+cbor", Application, &["senmlc"]),
    KnownType::new("application/senml+json", "senml+json", Application, &["senml"]),
    KnownType::new("application/senml+xml", "senml+xml", Application, &["senmlx"]),
    KnownType::new("application/senml-etch+cbor", "senml-etch+cbor", Application, &["senml-etchc"]),
    KnownType::new("application/senml-etch+json", "senml-etch+json", Application, &["senml-etchj"]),
    KnownType::new("application/senml-exi", "senml-exi", Application, &["senmle"]),
    KnownType::new("application/sensml+cbor", "sensml+cbor", Application, &["sensmlc"]),
    KnownType::new("application/sensml+json", "sensml+json", Application, &["sensml"]),
    KnownType::new("application/sensml+xml", "sensml+xml", Application, &["sensmlx"]),
    KnownType::new("application/sensml-exi", "sensml-exi", Application, &["sensmle"]),
    KnownType::new("application/sep+xml", "sep+xml", Application, &[]),
    KnownType::new("application/sep-exi", "sep-exi", Application, &[]),
    KnownType::new("application/session-info", "session-info", Application, &[]),
    KnownType::new("application/set-payment", "set-payment", Application, &[]),
    KnownType::new("application/set-payment-initiation", "set-payment-initiation", Application, &[]),
    KnownType::new("application/set-registration", "set-registration", Application, &[]),
    KnownType::new("application/set-registration-initiation", "set-registration-initiation", Application, &[]),
    KnownType::new("application/sgml", "SGML", Application, &[]),
    KnownType::new("application/sgml-open-catalog", "sgml-open-catalog", Application, &["soc"]),
    KnownType::new("application/shf+xml", "shf+xml", Application, &["shf"]),
    KnownType::new("application/sieve", "sieve", Application, &["siv", "sieve"]),
    KnownType::new("application/simple-filter+xml", "simple-filter+xml", Application, &["cl"]),
    KnownType::new("application/simple-message-summary", "simple-message-summary", Application, &[]),
    KnownType::new("application/simplesymbolcontainer", "simpleSymbolContainer", Application, &[]),
    KnownType::new("application/sipc", "sipc", Application, &[]),
    KnownType::new("application/slate", "slate", Application, &[]),
    KnownType::new("application/smil+xml", "smil+xml", Application, &["smil", "smi", "sml"]),
    KnownType::new("application/smpte336m", "smpte336m", Application, &[]),
    KnownType::new("application/soap+fastinfoset", "soap+fastinfoset", Application, &[]),
    KnownType::new("application/soap+xml", "soap+xml", Application, &[]),
    KnownType::new("application/sparql-query", "sparql-query", Application, &["rq"]),
    KnownType::new("application/sparql-results+xml", "sparql-results+xml", Application, &["srx"]),
    KnownType::new("application/spdx+json", "spdx+json", Application, &["spdx.json"]),
    KnownType::new("application/spirits-event+xml", "spirits-event+xml", Application, &[]),
    KnownType::new("application/sql", "sql", Application, &["sql"]),
    KnownType::new("application/srgs", "srgs", Application, &["gram"]),
    KnownType::new("application/srgs+xml", "srgs+xml", Application, &["grxml"]),
    KnownType::new("application/sru+xml", "sru+xml", Application, &["sru"]),
    KnownType::new("application/ssml+xml", "ssml+xml", Application, &["ssml"]),
    KnownType::new("application/stix+json", "stix+json", Application, &["stix"]),
    KnownType::new("application/swid+cbor", "swid+cbor", Application, &["coswid"]),
    KnownType::new("application/swid+xml", "swid+xml", Application, &["swidtag"]),
    KnownType::new("application/tamp-apex-update", "tamp-apex-update", Application, &["tau"]),
    KnownType::new("application/tamp-apex-update-confirm", "tamp-apex-update-confirm", Application, &["auc"]),
    KnownType::new("application/tamp-community-update", "tamp-community-update", Application, &["tcu"]),
    KnownType::new("application/tamp-community-update-confirm", "tamp-community-update-confirm", Application, &["cuc"]),
    KnownType::new("application/tamp-error", "tamp-error", Application, &["ter"]),
    KnownType::new("application/tamp-sequence-adjust", "tamp-sequence-adjust", Application, &["tsa"]),
    KnownType::new("application/tamp-sequence-adjust-confirm", "tamp-sequence-adjust-confirm", Application, &["sac"]),
    KnownType::new("application/tamp-status-query", "tamp-status-query", Application, &[]),
    KnownType::new("application/tamp-status-response", "tamp-status-response", Application, &[]),
    KnownType::new("application/tamp-update", "tamp-update", Application, &["tur"]),
    KnownType::new("application/tamp-update-confirm", "tamp-update-confirm", Application, &["tuc"]),
    KnownType::new("application/taxii+json", "taxii+json", Application, &[]),
    KnownType::new("application/td+json", "td+json", Application, &["jsontd"]),
    KnownType::new("application/tei+xml", "tei+xml", Application, &["tei", "teicorpus", "odd"]),
    KnownType::new("application/tetra_isi", "TETRA_ISI", Application, &[]),
    KnownType::new("application/thraud+xml", "thraud+xml", Application, &["tfi"]),
    KnownType::new("application/timestamp-query", "timestamp-query", Application, &["tsq"]),
    KnownType::new("application/timestamp-reply", "timestamp-reply", Application, &["tsr"]),
    KnownType::new("application/timestamped-data", "timestamped-data", Application, &["tsd"]),
    KnownType::new("application/tlsrpt+gzip", "tlsrpt+gzip", Application, &[]),
    KnownType::new("application/tlsrpt+json", "tlsrpt+json", Application, &[]),
    KnownType::new("application/tm+json", "tm+json", Application, &["tm.jsonld", "tm.json", "jsontm"]),
    KnownType::new("application/tnauthlist", "tnauthlist", Application, &[]),
    KnownType::new("application/token-introspection+jwt", "token-introspection+jwt", Application, &[]),
    KnownType::new("application/trickle-ice-sdpfrag", "trickle-ice-sdpfrag", Application, &[]),
    KnownType::new("application/trig", "trig", Application, &["trig"]),
    KnownType::new("application/ttml+xml", "ttml+xml", Application, &["ttml"]),
    KnownType::new("application/tve-trigger", "tve-trigger", Application, &[]),
    KnownType::new("application/tzif", "tzif", Application, &[]),
    KnownType::new("application/tzif-leap", "tzif-leap", Application, &[]),
    KnownType::new("application/ulpfec", "ulpfec", Application, &[]),
    KnownType::new("application/urc-grpsheet+xml", "urc-grpsheet+xml", Application, &["gsheet"]),
    KnownType::new("application/urc-ressheet+xml", "urc-ressheet+xml", Application, &["rsheet"]),
    KnownType::new("application/urc-targetdesc+xml", "urc-targetdesc+xml", Application, &["td"]),
    KnownType::new("application/urc-uisocketdesc+xml", "urc-uisocketdesc+xml", Application, &["uis"]),
    KnownType::new("application/vcard+json", "vcard+json", Application, &[]),
    KnownType::new("application/vcard+xml", "vcard+xml", Application, &[]),
    KnownType::new("application/vemmi", "vemmi", Application, &[]),
    KnownType::new("application/vnd.1000minds.decision-model+xml", "vnd.1000minds.decision-model+xml", Application, &["1km"]),
    KnownType::new("application/vnd.3gpp-prose+xml", "vnd.3gpp-prose+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp-prose-pc3a+xml", "vnd.3gpp-prose-pc3a+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp-prose-pc3ach+xml", "vnd.3gpp-prose-pc3ach+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp-prose-pc3ch+xml", "vnd.3gpp-prose-pc3ch+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp-prose-pc8+xml", "vnd.3gpp-prose-pc8+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp-v2x-local-service-information", "vnd.3gpp-v2x-local-service-information", Application, &[]),
    KnownType::new("application/vnd.3gpp.5gnas", "vnd.3gpp.5gnas", Application, &[]),
    KnownType::new("application/vnd.3gpp.access-transfer-events+xml", "vnd.3gpp.access-transfer-events+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.bsf+xml", "vnd.3gpp.bsf+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.gmop+xml", "vnd.3gpp.GMOP+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.gtpc", "vnd.3gpp.gtpc", Application, &[]),
    KnownType::new("application/vnd.3gpp.interworking-data", "vnd.3gpp.interworking-data", Application, &[]),
    KnownType::new("application/vnd.3gpp.lpp", "vnd.3gpp.lpp", Application, &[]),
    KnownType::new("application/vnd.3gpp.mc-signalling-ear", "vnd.3gpp.mc-signalling-ear", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcdata-affiliation-command+xml", "vnd.3gpp.mcdata-affiliation-command+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcdata-info+xml", "vnd.3gpp.mcdata-info+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcdata-msgstore-ctrl-request+xml", "vnd.3gpp.mcdata-msgstore-ctrl-request+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcdata-payload", "vnd.3gpp.mcdata-payload", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcdata-regroup+xml", "vnd.3gpp.mcdata-regroup+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcdata-service-config+xml", "vnd.3gpp.mcdata-service-config+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcdata-signalling", "vnd.3gpp.mcdata-signalling", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcdata-ue-config+xml", "vnd.3gpp.mcdata-ue-config+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcdata-user-profile+xml", "vnd.3gpp.mcdata-user-profile+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-affiliation-command+xml", "vnd.3gpp.mcptt-affiliation-command+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-floor-request+xml", "vnd.3gpp.mcptt-floor-request+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-info+xml", "vnd.3gpp.mcptt-info+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-location-info+xml", "vnd.3gpp.mcptt-location-info+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-mbms-usage-info+xml", "vnd.3gpp.mcptt-mbms-usage-info+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-service-config+xml", "vnd.3gpp.mcptt-service-config+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-signed+xml", "vnd.3gpp.mcptt-signed+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-ue-config+xml", "vnd.3gpp.mcptt-ue-config+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-ue-init-config+xml", "vnd.3gpp.mcptt-ue-init-config+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcptt-user-profile+xml", "vnd.3gpp.mcptt-user-profile+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcvideo-affiliation-command+xml", "vnd.3gpp.mcvideo-affiliation-command+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcvideo-info+xml", "vnd.3gpp.mcvideo-info+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcvideo-location-info+xml", "vnd.3gpp.mcvideo-location-info+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcvideo-mbms-usage-info+xml", "vnd.3gpp.mcvideo-mbms-usage-info+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcvideo-service-config+xml", "vnd.3gpp.mcvideo-service-config+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcvideo-transmission-request+xml", "vnd.3gpp.mcvideo-transmission-request+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcvideo-ue-config+xml", "vnd.3gpp.mcvideo-ue-config+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mcvideo-user-profile+xml", "vnd.3gpp.mcvideo-user-profile+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.mid-call+xml", "vnd.3gpp.mid-call+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.ngap", "vnd.3gpp.ngap", Application, &[]),
    KnownType::new("application/vnd.3gpp.pfcp", "vnd.3gpp.pfcp", Application, &[]),
    KnownType::new("application/vnd.3gpp.pic-bw-large", "vnd.3gpp.pic-bw-large", Application, &["plb"]),
    KnownType::new("application/vnd.3gpp.pic-bw-small", "vnd.3gpp.pic-bw-small", Application, &["psb"]),
    KnownType::new("application/vnd.3gpp.pic-bw-var", "vnd.3gpp.pic-bw-var", Application, &["pvb"]),
    KnownType::new("application/vnd.3gpp.s1ap", "vnd.3gpp.s1ap", Application, &[]),
    KnownType::new("application/vnd.3gpp.sms", "vnd.3gpp.sms", Application, &[]),
    KnownType::new("application/vnd.3gpp.sms+xml", "vnd.3gpp.sms+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.srvcc-ext+xml", "vnd.3gpp.srvcc-ext+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.srvcc-info+xml", "vnd.3gpp.SRVCC-info+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.state-and-event-info+xml", "vnd.3gpp.state-and-event-info+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp.ussd+xml", "vnd.3gpp.ussd+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp2.bcmcsinfo+xml", "vnd.3gpp2.bcmcsinfo+xml", Application, &[]),
    KnownType::new("application/vnd.3gpp2.sms", "vnd.3gpp2.sms", Application, &["sms"]),
    KnownType::new("application/vnd.3gpp2.tcap", "vnd.3gpp2.tcap", Application, &["tcap"]),
    KnownType::new("application/vnd.3lightssoftware.imagescal", "vnd.3lightssoftware.imagescal", Application, &["imgcal"]),
    KnownType::new("application/vnd.3m.post-it-notes", "vnd.3M.Post-it-Notes", Application, &["pwn"]),
    KnownType::new("application/vnd.accpac.simply.aso", "vnd.accpac.simply.aso", Application, &["aso"]),
    KnownType::new("application/vnd.accpac.simply.imp", "vnd.accpac.simply.imp", Application, &["imp"]),
    KnownType::new("application/vnd.acucobol", "vnd.acucobol", Application, &["acu"]),
    KnownType::new("application/vnd.acucorp", "vnd.acucorp", Application, &["atc", "acutc"]),
    KnownType::new("application/vnd.adobe.flash.movie", "vnd.adobe.flash.movie", Application, &["swf"]),
    KnownType::new("application/vnd.adobe.formscentral.fcdt", "vnd.adobe.formscentral.fcdt", Application, &["fcdt"]),
    KnownType::new("application/vnd.adobe.fxp", "vnd.adobe.fxp", Application, &["fxp", "fxpl"]),
    KnownType::new("application/vnd.adobe.partial-upload", "vnd.adobe.partial-upload", Application, &[]),
    KnownType::new("application/vnd.adobe.xdp+xml", "vnd.adobe.xdp+xml", Application, &["xdp"]),
    KnownType::new("application/vnd.aether.imp", "vnd.aether.imp", Application, &[]),
    KnownType::new("application/vnd.afpc.afplinedata", "vnd.afpc.afplinedata", Application, &[]),
    KnownType::new("application/vnd.afpc.afplinedata-pagedef", "vnd.afpc.afplinedata-pagedef", Application, &[]),
    KnownType::new("application/vnd.afpc.cmoca-cmresource", "vnd.afpc.cmoca-cmresource", Application, &[]),
    KnownType::new("application/vnd.afpc.foca-charset", "vnd.afpc.foca-charset", Application, &[]),
    KnownType::new("application/vnd.afpc.foca-codedfont", "vnd.afpc.foca-codedfont", Application, &[]),
    KnownType::new("application/vnd.afpc.foca-codepage", "vnd.afpc.foca-codepage", Application, &[]),
    KnownType::new("application/vnd.afpc.modca", "vnd.afpc.modca", Application, &["list3820", "listafp", "afp", "pseg3820"]),
    KnownType::new("application/vnd.afpc.modca-formdef", "vnd.afpc.modca-formdef", Application, &[]),
    KnownType::new("application/vnd.afpc.modca-mediummap", "vnd.afpc.modca-mediummap", Application, &[]),
    KnownType::new("application/vnd.afpc.modca-objectcontainer", "vnd.afpc.modca-objectcontainer", Application, &[]),
    KnownType::new("application/vnd.afpc.modca-overlay", "vnd.afpc.modca-overlay", Application, &["ovl"]),
    KnownType::new("application/vnd.afpc.modca-pagesegment", "vnd.afpc.modca-pagesegment", Application, &["psg"]),
    KnownType::new("application/vnd.age", "vnd.age", Application, &["age"]),
    KnownType::new("application/vnd.ah-barcode", "vnd.ah-barcode", Application, &[]),
    KnownType::new("application/vnd.ahead.space", "vnd.ahead.space", Application, &["ahead"]),
    KnownType::new("application/vnd.airzip.filesecure.azf", "vnd.airzip.filesecure.azf", Application, &["azf"]),
    KnownType::new("application/vnd.airzip.filesecure.azs", "vnd.airzip.filesecure.azs", Application, &["azs"]),
    KnownType::new("application/vnd.amadeus+json", "vnd.amadeus+json", Application, &[]),
    KnownType::new("application/vnd.amazon.mobi8-ebook", "vnd.amazon.mobi8-ebook", Application, &["azw3"]),
    KnownType::new("application/vnd.americandynamics.acc", "vnd.americandynamics.acc", Application, &["acc"]),
    KnownType::new("application/vnd.amiga.ami", "vnd.amiga.ami", Application, &["ami"]),
    KnownType::new("application/vnd.amundsen.maze+xml", "vnd.amundsen.maze+xml", Application, &[]),
    KnownType::new("application/vnd.android.ota", "vnd.android.ota", Application, &["ota"]),
    KnownType::new("application/vnd.android.package-archive", "vnd.android.package-archive", Application, &["apk"]),
    KnownType::new("application/vnd.anki", "vnd.anki", Application, &["apkg"]),
    KnownType::new("application/vnd.anser-web-certificate-issue-initiation", "vnd.anser-web-certificate-issue-initiation", Application, &["cii"]),
    KnownType::new("application/vnd.anser-web-funds-transfer-initiation", "vnd.anser-web-funds-transfer-initiation", Application, &["fti"]),
    KnownType::new("application/vnd.antix.game-component", "vnd.antix.game-component", Application, &[]),
    KnownType::new("application/vnd.apache.arrow.file", "vnd.apache.arrow.file", Application, &["arrow"]),
    KnownType::new("application/vnd.apache.arrow.stream", "vnd.apache.arrow.stream", Application, &["arrows"]),
    KnownType::new("application/vnd.apache.thrift.binary", "vnd.apache.thrift.binary", Application, &[]),
    KnownType::new("application/vnd.apache.thrift.compact", "vnd.apache.thrift.compact", Application, &[]),
    KnownType::new("application/vnd.apache.thrift.json", "vnd.apache.thrift.json", Application, &[]),
    KnownType::new("application/vnd.apexlang", "vnd.apexlang", Application, &["apexlang", "apex"]),
    KnownType::new("application/vnd.api+json", "vnd.api+json", Application, &[]),
    KnownType::new("application/vnd.aplextor.warrp+json", "vnd.aplextor.warrp+json", Application, &[]),
    KnownType::new("application/vnd.apothekende.reservation+json", "vnd.apothekende.reservation+json", Application, &[]),
    KnownType::new("application/vnd.apple.installer+xml", "vnd.apple.installer+xml", Application, &["dist", "distz", "pkg", "mpkg"]),
    KnownType::new("application/vnd.apple.keynote", "vnd.apple.keynote", Application, &["keynote"]),
    KnownType::new("application/vnd.apple.mpegurl", "vnd.apple.mpegurl", Application, &["m3u8"]),
    KnownType::new("application/vnd.apple.numbers", "vnd.apple.numbers", Application, &["numbers"]),
    KnownType::new("application/vnd.apple.pages", "vnd.apple.pages", Application, &["pages"]),
    KnownType::new("application/vnd.aristanetworks.swi", "vnd.aristanetworks.swi", Application, &["swi"]),
    KnownType::new("application/vnd.artisan+json", "vnd.artisan+json", Application, &["artisan"]),
    KnownType::new("application/vnd.artsquare", "vnd.artsquare", Application, &[]),
    KnownType::new("application/vnd.astraea-software.iota", "vnd.astraea-software.iota", Application, &["iota"]),
    KnownType::new("application/vnd.audiograph", "vnd.audiograph", Application, &["aep"]),
    KnownType::new("application/vnd.autopackage", "vnd.autopackage", Application, &["package"]),
    KnownType::new("application/vnd.avalon+json", "vnd.avalon+json", Application, &[]),
    KnownType::new("application/vnd.avistar+xml", "vnd.avistar+xml", Application, &[]),
    KnownType::new("application/vnd.balsamiq.bmml+xml", "vnd.balsamiq.bmml+xml", Application, &["bmml"]),
    KnownType::new("application/vnd.balsamiq.bmpr", "vnd.balsamiq.bmpr", Application, &["bmpr"]),
    KnownType::new("application/vnd.banana-accounting", "vnd.banana-accounting", Application, &["ac2"]),
    KnownType::new("application/vnd.bbf.usp.error", "vnd.bbf.usp.error", Application, &[]),
    KnownType::new("application/vnd.bbf.usp.msg", "vnd.bbf.usp.msg", Application, &[]),
    KnownType::new("application/vnd.bbf.usp.msg+json", "vnd.bbf.usp.msg+json", Application, &[]),
    KnownType::new("application/vnd.bekitzur-stech+json", "vnd.bekitzur-stech+json", Application, &[]),
    KnownType::new("application/vnd.belightsoft.lhzd+zip", "vnd.belightsoft.lhzd+zip", Application, &["lhzd"]),
    KnownType::new("application/vnd.belightsoft.lhzl+zip", "vnd.belightsoft.lhzl+zip", Application, &["lhzl"]),
    KnownType::new("application/vnd.bint.med-content", "vnd.bint.med-content", Application, &[]),
    KnownType::new("application/vnd.biopax.rdf+xml", "vnd.biopax.rdf+xml", Application, &[]),
    KnownType::new("application/vnd.blink-idb-value-wrapper", "vnd.blink-idb-value-wrapper", Application, &[]),
    KnownType::new("application/vnd.blueice.multipass", "vnd.blueice.multipass", Application, &["mpm"]),
    KnownType::new("application/vnd.bluetooth.ep.oob", "vnd.bluetooth.ep.oob", Application, &["ep"]),
    KnownType::new("application/vnd.bluetooth.le.oob", "vnd.bluetooth.le.oob", Application, &["le"]),
    KnownType::new("application/vnd.bmi", "vnd.bmi", Application, &["bmi"]),
    KnownType::new("application/vnd.bpf", "vnd.bpf", Application, &[]),
    KnownType::new("application/vnd.bpf3", "vnd.bpf3", Application, &[]),
    KnownType::new("application/vnd.businessobjects", "vnd.businessobjects", Application, &["rep"]),
    KnownType::new("application/vnd.byu.uapi+json", "vnd.byu.uapi+json", Application, &[]),
    KnownType::new("application/vnd.cab-jscript", "vnd.cab-jscript", Application, &[]),
    KnownType::new("application/vnd.canon-cpdl", "vnd.canon-cpdl", Application, &[]),
    KnownType::new("application/vnd.canon-lips", "vnd.canon-lips", Application, &[]),
    KnownType::new("application/vnd.capasystems-pg+json", "vnd.capasystems-pg+json", Application, &[]),
    KnownType::new("application/vnd.cendio.thinlinc.clientconf", "vnd.cendio.thinlinc.clientconf", Application, &["tlclient"]),
    KnownType::new("application/vnd.century-systems.tcp_stream", "vnd.century-systems.tcp_stream", Application, &[]),
    KnownType::new("application/vnd.chemdraw+xml", "vnd.chemdraw+xml", Application, &["cdxml"]),
    KnownType::new("application/vnd.chess-pgn", "vnd.chess-pgn", Application, &["pgn"]),
    KnownType::new("application/vnd.chipnuts.karaoke-mmd", "vnd.chipnuts.karaoke-mmd", Application, &["mmd"]),
    KnownType::new("application/vnd.ciedi", "vnd.ciedi", Application, &[]),
    KnownType::new("application/vnd.cinderella", "vnd.cinderella", Application, &["cdy"]),
    KnownType::new("application/vnd.cirpack.isdn-ext", "vnd.cirpack.isdn-ext", Application, &[]),
    KnownType::new("application/vnd.citationstyles.style+xml", "vnd.citationstyles.style+xml", Application, &["csl"]),
    KnownType::new("application/vnd.claymore", "vnd.claymore", Application, &["cla"]),
    KnownType::new("application/vnd.cloanto.rp9", "vnd.cloanto.rp9", Application, &["rp9"]),
    KnownType::new("application/vnd.clonk.c4group", "vnd.clonk.c4group", Application, &["c4g", "c4d", "c4f", "c4p", "c4u"]),
    KnownType::new("application/vnd.cluetrust.cartomobile-config", "vnd.cluetrust.cartomobile-config", Application, &["c11amc"]),
    KnownType::new("application/vnd.cluetrust.cartomobile-config-pkg", "vnd.cluetrust.cartomobile-config-pkg", Application, &["c11amz"]),
    KnownType::new("application/vnd.cncf.helm.chart.content.v1.tar+gzip", "vnd.cncf.helm.chart.content.v1.tar+gzip", Application, &[]),
    KnownType::new("application/vnd.cncf.helm.chart.provenance.v1.prov", "vnd.cncf.helm.chart.provenance.v1.prov", Application, &[]),
    KnownType::new("application/vnd.coffeescript", "vnd.coffeescript", Application, &["coffee"]),
    KnownType::new("application/vnd.collabio.xodocuments.document", "vnd.collabio.xodocuments.document", Application, &["xodt"]),
    KnownType::new("application/vnd.collabio.xodocuments.document-template", "vnd.collabio.xodocuments.document-template", Application, &["xott"]),
    KnownType::new("application/vnd.collabio.xodocuments.presentation", "vnd.collabio.xodocuments.presentation", Application, &["xodp"]),
    KnownType::new("application/vnd.collabio.xodocuments.presentation-template", "vnd.collabio.xodocuments.presentation-template", Application, &["xotp"]),
    KnownType::new("application/vnd.collabio.xodocuments.spreadsheet", "vnd.collabio.xodocuments.spreadsheet", Application, &["xods"]),
    KnownType::new("application/vnd.collabio.xodocuments.spreadsheet-template", "vnd.collabio.xodocuments.spreadsheet-template", Application, &["xots"]),
    KnownType::new("application/vnd.collection+json", "vnd.collection+json", Application, &[]),
    KnownType::new("application/vnd.collection.doc+json", "vnd.collection.doc+json", Application, &[]),
    KnownType::new("application/vnd.collection.next+json", "vnd.collection.next+json", Application, &[]),
    KnownType::new("application/vnd.comicbook+zip", "vnd.comicbook+zip", Application, &["cbz"]),
    KnownType::new("application/vnd.comicbook-rar", "vnd.comicbook-rar", Application, &["cbr"]),
    KnownType::new("application/vnd.commerce-battelle", "vnd.commerce-battelle", Application, &["icf", "icd", "ic0", "ic1", "ic2", "ic3", "ic4", "ic5", "ic6", "ic7", "ic8"]),
    KnownType::new("application/vnd.commonspace", "vnd.commonspace", Application, &["csp", "cst"]),
    KnownType::new("application/vnd.contact.cmsg", "vnd.contact.cmsg", Application, &["cdbcmsg"]),
    KnownType::new("application/vnd.coreos.ignition+json", "vnd.coreos.ignition+json", Application, &["ign", "ignition"]),
    KnownType::new("application/vnd.cosmocaller", "vnd.cosmocaller", Application, &["cmc"]),
    KnownType::new("application/vnd.crick.clicker", "vnd.crick.clicker", Application, &["clkx"]),
    KnownType::new("application/vnd.crick.clicker.keyboard", "vnd.crick.clicker.keyboard", Application, &["clkk"]),
    KnownType::new("application/vnd.crick.clicker.palette", "vnd.crick.clicker.palette", Application, &["clkp"]),
    KnownType::new("application/vnd.crick.clicker.template", "vnd.crick.clicker.template", Application, &["clkt"]),
    KnownType::new("application/vnd.crick.clicker.wordbank", "vnd.crick.clicker.wordbank", Application, &["clkw"]),
    KnownType::new("application/vnd.criticaltools.wbs+xml", "vnd.criticaltools.wbs+xml", Application, &["wbs"]),
    KnownType::new("application/vnd.cryptii.pipe+json", "vnd.cryptii.pipe+json", Application, &[]),
    KnownType::new("application/vnd.crypto-shade-file", "vnd.crypto-shade-file", Application, &["ssvc"]),
    KnownType::new("application/vnd.cryptomator.encrypted", "vnd.cryptomator.encrypted", Application, &["c9r", "c9s"]),
    KnownType::new("application/vnd.cryptomator.vault", "vnd.cryptomator.vault", Application, &["cryptomator"]),
    KnownType::new("application/vnd.ctc-posml", "vnd.ctc-posml", Application, &["pml"]),
    KnownType::new("application/vnd.ctct.ws+xml", "vnd.ctct.ws+xml", Application, &[]),
    KnownType::new("application/vnd.cups-pdf", "vnd.cups-pdf", Application, &[]),
    KnownType::new("application/vnd.cups-postscript", "vnd.cups-postscript", Application, &[]),
    KnownType::new("application/vnd.cups-ppd", "vnd.cups-ppd", Application, &["ppd"]),
    KnownType::new("application/vnd.cups-raster", "vnd.cups-raster", Application, &[]),
    KnownType::new("application/vnd.cups-raw", "vnd.cups-raw", Application, &[]),
    KnownType::new("application/vnd.curl", "vnd.curl", Application, &[]),
    KnownType::new("application/vnd.cyan.dean.root+xml", "vnd.cyan.dean.root+xml", Application, &[]),
    KnownType::new("application/vnd.cybank", "vnd.cybank", Application, &[]),
    KnownType::new("application/vnd.cyclonedx+json", "vnd.cyclonedx+json", Application, &[]),
    KnownType::new("application/vnd.cyclonedx+xml", "vnd.cyclonedx+xml", Application, &[]),
    KnownType::new("application/vnd.d2l.coursepackage1p0+zip", "vnd.d2l.coursepackage1p0+zip", Application, &[]),
    KnownType::new("application/vnd.d3m-dataset", "vnd.d3m-dataset", Application, &[]),
    KnownType::new("application/vnd.d3m-problem", "vnd.d3m-problem", Application, &[]),
    KnownType::new("application/vnd.dart", "vnd.dart", Application, &["dart"]),
    KnownType::new("application/vnd.data-vision.rdz", "vnd.data-vision.rdz", Application, &["rdz"]),
    KnownType::new("application/vnd.datalog", "vnd.datalog", Application, &["dl"]),
    KnownType::new("application/vnd.datapackage+json", "vnd.datapackage+json", Application, &[]),
    KnownType::new("application/vnd.dataresource+json", "vnd.dataresource+json", Application, &[]),
    KnownType::new("application/vnd.dbf", "vnd.dbf", Application, &["dbf"]),
    KnownType::new("application/vnd.debian.binary-package", "vnd.debian.binary-package", Application, &["deb", "ddeb", "udeb"]),
    KnownType::new("application/vnd.dece.data", "vnd.dece.data", Application, &["uvf", "uvvf", "uvd", "uvvd"]),
    KnownType::new("application/vnd.dece.ttml+xml", "vnd.dece.ttml+xml", Application, &["uvt", "uvvt"]),
    KnownType::new("application/vnd.dece.unspecified", "vnd.dece.unspecified", Application, &["uvx", "uvvx"]),
    KnownType::new("application/vnd.dece.zip", "vnd.dece.zip", Application, &["uvz", "uvvz"]),
    KnownType::new("application/vnd.denovo.fcselayout-link", "vnd.denovo.fcselayout-link", Application, &["fe_launch"]),
    KnownType::new("application/vnd.desmume.movie", "vnd.desmume.movie", Application, &["dsm"]),
    KnownType::new("application/vnd.dir-bi.plate-dl-nosuffix", "vnd.dir-bi.plate-dl-nosuffix", Application, &[]),
    KnownType::new("application/vnd.dm.delegation+xml", "vnd.dm.delegation+xml", Application, &[]),
    KnownType::new("application/vnd.dna", "vnd.dna", Application, &["dna"]),
    KnownType::new("application/vnd.document+json", "vnd.document+json", Application, &["docjson"]),
    KnownType::new("application/vnd.dolby.mobile.1", "vnd.dolby.mobile.1", Application, &[]),
    KnownType::new("application/vnd.dolby.mobile.2", "vnd.dolby.mobile.2", Application, &[]),
    KnownType::new("application/vnd.doremir.scorecloud-binary-document", "vnd.doremir.scorecloud-binary-document", Application, &["scld"]),
    KnownType::new("application/vnd.dpgraph", "vnd.dpgraph", Application, &["dpg", "mwc", "dpgraph"]),
    KnownType::new("application/vnd.dreamfactory", "vnd.dreamfactory", Application, &["dfac"]),
    KnownType::new("application/vnd.drive+json", "vnd.drive+json", Application, &[]),
    KnownType::new("application/vnd.dtg.local", "vnd.dtg.local", Application, &[]),
    KnownType::new("application/vnd.dtg.local.flash", "vnd.dtg.local.flash", Application, &["fla"]),
    KnownType::new("application/vnd.dtg.local.html", "vnd.dtg.local.html", Application, &[]),
    KnownType::new("application/vnd.dvb.ait", "vnd.dvb.ait", Application, &["ait"]),
    KnownType::new("application/vnd.dvb.dvbisl+xml", "vnd.dvb.dvbisl+xml", Application, &[]),
    KnownType::new("application/vnd.dvb.dvbj", "vnd.dvb.dvbj", Application, &[]),
    KnownType::new("application/vnd.dvb.esgcontainer", "vnd.dvb.esgcontainer", Application, &[]),
    KnownType::new("application/vnd.dvb.ipdcdftnotifaccess", "vnd.dvb.ipdcdftnotifaccess", Application, &[]),
    KnownType::new("application/vnd.dvb.ipdcesgaccess", "vnd.dvb.ipdcesgaccess", Application, &[]),
    KnownType::new("application/vnd.dvb.ipdcesgaccess2", "vnd.dvb.ipdcesgaccess2", Application, &[]),
    KnownType::new("application/vnd.dvb.ipdcesgpdd", "vnd.dvb.ipdcesgpdd", Application, &[]),
    KnownType::new("application/vnd.dvb.ipdcroaming", "vnd.dvb.ipdcroaming", Application, &[]),
    KnownType::new("application/vnd.dvb.iptv.alfec-base", "vnd.dvb.iptv.alfec-base", Application, &[]),
    KnownType::new("application/vnd.dvb.iptv.alfec-enhancement", "vnd.dvb.iptv.alfec-enhancement", Application, &[]),
    KnownType::new("application/vnd.dvb.notif-aggregate-root+xml", "vnd.dvb.notif-aggregate-root+xml", Application, &[]),
    KnownType::new("application/vnd.dvb.notif-container+xml", "vnd.dvb.notif-container+xml", Application, &[]),
    KnownType::new("application/vnd.dvb.notif-generic+xml", "vnd.dvb.notif-generic+xml", Application, &[]),
    KnownType::new("application/vnd.dvb.notif-ia-msglist+xml", "vnd.dvb.notif-ia-msglist+xml", Application, &[]),
    KnownType::new("application/vnd.dvb.notif-ia-registration-request+xml", "vnd.dvb.notif-ia-registration-request+xml", Application, &[]),
    KnownType::new("application/vnd.dvb.notif-ia-registration-response+xml", "vnd.dvb.notif-ia-registration-response+xml", Application, &[]),
    KnownType::new("application/vnd.dvb.notif-init+xml", "vnd.dvb.notif-init+xml", Application, &[]),
    KnownType::new("application/vnd.dvb.pfr", "vnd.dvb.pfr", Application, &[]),
    KnownType::new("application/vnd.dvb.service", "vnd.dvb.service", Application, &["svc"]),
    KnownType::new("application/vnd.dxr", "vnd.dxr", Application, &[]),
    KnownType::new("application/vnd.dynageo", "vnd.dynageo", Application, &["geo"]),
    KnownType::new("application/vnd.dzr", "vnd.dzr", Application, &["dzr"]),
    KnownType::new("application/vnd.easykaraoke.cdgdownload", "vnd.easykaraoke.cdgdownload", Application, &[]),
    KnownType::new("application/vnd.ecdis-update", "vnd.ecdis-update", Application, &[]),
    KnownType::new("application/vnd.ecip.rlp", "vnd.ecip.rlp", Application, &[]),
    KnownType::new("application/vnd.eclipse.ditto+json", "vnd.eclipse.ditto+json", Application, &[]),
    KnownType::new("application/vnd.ecowin.chart", "vnd.ecowin.chart", Application, &["mag"]),
    KnownType::new("application/vnd.ecowin.filerequest", "vnd.ecowin.filerequest", Application, &[]),
    KnownType::new("application/vnd.ecowin.fileupdate", "vnd.ecowin.fileupdate", Application, &[]),
    KnownType::new("application/vnd.ecowin.series", "vnd.ecowin.series", Application, &[]),
    KnownType::new("application/vnd.ecowin.seriesrequest", "vnd.ecowin.seriesrequest", Application, &[]),
    KnownType::new("application/vnd.ecowin.seriesupdate", "vnd.ecowin.seriesupdate", Application, &[]),
    KnownType::new("application/vnd.efi.img", "vnd.efi.img", Application, &[]),
    KnownType::new("application/vnd.efi.iso", "vnd.efi.iso", Application, &[]),
    KnownType::new("application/vnd.eln+zip", "vnd.eln+zip", Application, &["eln"]),
    KnownType::new("application/vnd.emclient.accessrequest+xml", "vnd.emclient.accessrequest+xml", Application, &[]),
    KnownType::new("application/vnd.enliven", "vnd.enliven", Application, &["nml"]),
    KnownType::new("application/vnd.enphase.envoy", "vnd.enphase.envoy", Application, &[]),
    KnownType::new("application/vnd.eprints.data+xml", "vnd.eprints.data+xml", Application, &[]),
    KnownType::new("application/vnd.epson.esf", "vnd.epson.esf", Application, &["esf"]),
    KnownType::new("application/vnd.epson.msf", "vnd.epson.msf", Application, &["msf"]),
    KnownType::new("application/vnd.epson.quickanime", "vnd.epson.quickanime", Application, &["qam"]),
    KnownType::new("application/vnd.epson.salt", "vnd.epson.salt", Application, &["slt"]),
    KnownType::new("application/vnd.epson.ssf", "vnd.epson.ssf", Application, &["ssf"]),
    KnownType::new("application/vnd.ericsson.quickcall", "vnd.ericsson.quickcall", Application, &["qcall", "qca"]),
    KnownType::new("application/vnd.espass-espass+zip", "vnd.espass-espass+zip", Application, &["espass"]),
    KnownType::new("application/vnd.eszigno3+xml", "vnd.eszigno3+xml", Application, &["es3", "et3"]),
    KnownType::new("application/vnd.etsi.aoc+xml", "vnd.etsi.aoc+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.asic-e+zip", "vnd.etsi.asic-e+zip", Application, &["asice", "sce"]),
    KnownType::new("application/vnd.etsi.asic-s+zip", "vnd.etsi.asic-s+zip", Application, &["asics"]),
    KnownType::new("application/vnd.etsi.cug+xml", "vnd.etsi.cug+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.iptvcommand+xml", "vnd.etsi.iptvcommand+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.iptvdiscovery+xml", "vnd.etsi.iptvdiscovery+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.iptvprofile+xml", "vnd.etsi.iptvprofile+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.iptvsad-bc+xml", "vnd.etsi.iptvsad-bc+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.iptvsad-cod+xml", "vnd.etsi.iptvsad-cod+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.iptvsad-npvr+xml", "vnd.etsi.iptvsad-npvr+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.iptvservice+xml", "vnd.etsi.iptvservice+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.iptvsync+xml", "vnd.etsi.iptvsync+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.iptvueprofile+xml", "vnd.etsi.iptvueprofile+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.mcid+xml", "vnd.etsi.mcid+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.mheg5", "vnd.etsi.mheg5", Application, &[]),
    KnownType::new("application/vnd.etsi.overload-control-policy-dataset+xml", "vnd.etsi.overload-control-policy-dataset+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.pstn+xml", "vnd.etsi.pstn+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.sci+xml", "vnd.etsi.sci+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.simservs+xml", "vnd.etsi.simservs+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.timestamp-token", "vnd.etsi.timestamp-token", Application, &["tst"]),
    KnownType::new("application/vnd.etsi.tsl+xml", "vnd.etsi.tsl+xml", Application, &[]),
    KnownType::new("application/vnd.etsi.tsl.der", "vnd.etsi.tsl.der", Application, &[]),
    KnownType::new("application/vnd.eu.kasparian.car+json", "vnd.eu.kasparian.car+json", Application, &["carjson"]),
    KnownType::new("application/vnd.eudora.data", "vnd.eudora.data", Application, &[]),
    KnownType::new("application/vnd.evolv.ecig.profile", "vnd.evolv.ecig.profile", Application, &["ecigprofile"]),
    KnownType::new("application/vnd.evolv.ecig.settings", "vnd.evolv.ecig.settings", Application, &["ecig"]),
    KnownType::new("application/vnd.evolv.ecig.theme", "vnd.evolv.ecig.theme", Application, &["ecigtheme"]),
    KnownType::new("application/vnd.exstream-empower+zip", "vnd.exstream-empower+zip", Application, &["mpw"]),
    KnownType::new("application/vnd.exstream-package", "vnd.exstream-package", Application, &["pub"]),
    KnownType::new("application/vnd.ezpix-album", "vnd.ezpix-album", Application, &["ez2"]),
    KnownType::new("application/vnd.ezpix-package", "vnd.ezpix-package", Application, &["ez3"]),
    KnownType::new("application/vnd.f-secure.mobile", "vnd.f-secure.mobile", Application, &[]),
    KnownType::new("application/vnd.familysearch.gedcom+zip", "vnd.familysearch.gedcom+zip", Application, &["gdz"]),
    KnownType::new("application/vnd.fastcopy-disk-image", "vnd.fastcopy-disk-image", Application, &["dim"]),
    KnownType::new("application/vnd.fdsn.mseed", "vnd.fdsn.mseed", Application, &["msd", "mseed"]),
    KnownType::new("application/vnd.fdsn.seed", "vnd.fdsn.seed", Application, &["seed", "dataless"]),
    KnownType::new("application/vnd.ffsns", "vnd.ffsns", Application, &[]),
    KnownType::new("application/vnd.ficlab.flb+zip", "vnd.ficlab.flb+zip", Application, &["flb"]),
    KnownType::new("application/vnd.filmit.zfc", "vnd.filmit.zfc", Application, &["zfc"]),
    KnownType::new("application/vnd.fints", "vnd.fints", Application, &[]),
    KnownType::new("application/vnd.firemonkeys.cloudcell", "vnd.firemonkeys.cloudcell", Application, &[]),
    KnownType::new("application/vnd.flographit", "vnd.FloGraphIt", Application, &["gph"]),
    KnownType::new("application/vnd.fluxtime.clip", "vnd.fluxtime.clip", Application, &["ftc"]),
    KnownType::new("application/vnd.font-fontforge-sfd", "vnd.font-fontforge-sfd", Application, &["sfd"]),
    KnownType::new("application/vnd.framemaker", "vnd.framemaker", Application, &["fm"]),
    KnownType::new("application/vnd.fsc.weblaunch", "vnd.fsc.weblaunch", Application, &["fsc"]),
    KnownType::new("application/vnd.fujifilm.fb.docuworks", "vnd.fujifilm.fb.docuworks", Application, &[]),
    KnownType::new("application/vnd.fujifilm.fb.docuworks.binder", "vnd.fujifilm.fb.docuworks.binder", Application, &[]),
    KnownType::new("application/vnd.fujifilm.fb.docuworks.container", "vnd.fujifilm.fb.docuworks.container", Application, &[]),
    KnownType::new("application/vnd.fujifilm.fb.jfi+xml", "vnd.fujifilm.fb.jfi+xml", Application, &[]),
    KnownType::new("application/vnd.fujitsu.oasys", "vnd.fujitsu.oasys", Application, &["oas"]),
    KnownType::new("application/vnd.fujitsu.oasys2", "vnd.fujitsu.oasys2", Application, &["oa2"]),
    KnownType::new("application/vnd.fujitsu.oasys3", "vnd.fujitsu.oasys3", Application, &["oa3"]),
    KnownType::new("application/vnd.fujitsu.oasysgp", "vnd.fujitsu.oasysgp", Application, &["fg5"]),
    KnownType::new("application/vnd.fujitsu.oasysprs", "vnd.fujitsu.oasysprs", Application, &["bh2"]),
    KnownType::new("application/vnd.fujixerox.art-ex", "vnd.fujixerox.ART-EX", Application, &[]),
    KnownType::new("application/vnd.fujixerox.art4", "vnd.fujixerox.ART4", Application, &[]),
    KnownType::new("application/vnd.fujixerox.ddd", "vnd.fujixerox.ddd", Application, &["ddd"]),
    KnownType::new("application/vnd.fujixerox.docuworks", "vnd.fujixerox.docuworks", Application, &["xdw"]),
    KnownType::new("application/vnd.fujixerox.docuworks.binder", "vnd.fujixerox.docuworks.binder", Application, &["xbd"]),
    KnownType::new("application/vnd.fujixerox.docuworks.container", "vnd.fujixerox.docuworks.container", Application, &["xct"]),
    KnownType::new("application/vnd.fujixerox.hbpl", "vnd.fujixerox.HBPL", Application, &[]),
    KnownType::new("application/vnd.fut-misnet", "vnd.fut-misnet", Application, &[]),
    KnownType::new("application/vnd.futoin+cbor", "vnd.futoin+cbor", Application, &[]),
    KnownType::new("application/vnd.futoin+json", "vnd.futoin+json", Application, &[]),
    KnownType::new("application/vnd.fuzzysheet", "vnd.fuzzysheet", Application, &["fzs"]),
    KnownType::new("application/vnd.genomatix.tuxedo", "vnd.genomatix.tuxedo", Application, &["txd"]),
    KnownType::new("application/vnd.genozip", "vnd.genozip", Application, &["genozip"]),
    KnownType::new("application/vnd.gentics.grd+json", "vnd.gentics.grd+json", Application, &["grd"]),
    KnownType::new("application/vnd.gentoo.catmetadata+xml", "vnd.gentoo.catmetadata+xml", Application, &[]),
    KnownType::new("application/vnd.gentoo.ebuild", "vnd.gentoo.ebuild", Application, &["ebuild"]),
    KnownType::new("application/vnd.gentoo.eclass", "vnd.gentoo.eclass", Application, &["eclass"]),
    KnownType::new("application/vnd.gentoo.gpkg", "vnd.gentoo.gpkg", Application, &["gpkg.tar"]),
    KnownType::new("application/vnd.gentoo.manifest", "vnd.gentoo.manifest", Application, &[]),
    KnownType::new("application/vnd.gentoo.pkgmetadata+xml", "vnd.gentoo.pkgmetadata+xml", Application, &[]),
    KnownType::new("application/vnd.gentoo.xpak", "vnd.gentoo.xpak", Application, &["xpak"]),
    KnownType::new("application/vnd.geogebra.file", "vnd.geogebra.file", Application, &["ggb"]),
    KnownType::new("application/vnd.geogebra.slides", "vnd.geogebra.slides", Application, &["ggs"]),
    KnownType::new("application/vnd.geogebra.tool", "vnd.geogebra.tool", Application, &["ggt"]),
    KnownType::new("application/vnd.geometry-explorer", "vnd.geometry-explorer", Application, &["gex", "gre"]),
    KnownType::new("application/vnd.geonext", "vnd.geonext", Application, &["gxt"]),
    KnownType::new("application/vnd.geoplan", "vnd.geoplan", Application, &["g2w"]),
    KnownType::new("application/vnd.geospace", "vnd.geospace", Application, &["g3w"]),
    KnownType::new("application/vnd.gerber", "vnd.gerber", Application, &[]),
    KnownType::new("application/vnd.globalplatform.card-content-mgt", "vnd.globalplatform.card-content-mgt", Application, &[]),
    KnownType::new("application/vnd.globalplatform.card-content-mgt-response", "vnd.globalplatform.card-content-mgt-response", Application, &[]),
    KnownType::new("application/vnd.gnu.taler.exchange+json", "vnd.gnu.taler.exchange+json", Application, &[]),
    KnownType::new("application/vnd.gnu.taler.merchant+json", "vnd.gnu.taler.merchant+json", Application, &[]),
    KnownType::new("application/vnd.google-earth.kml+xml", "vnd.google-earth.kml+xml", Application, &["kml"]),
    KnownType::new("application/vnd.google-earth.kmz", "vnd.google-earth.kmz", Application, &["kmz"]),
    KnownType::new("application/vnd.gov.sk.e-form+xml", "vnd.gov.sk.e-form+xml", Application, &[]),
    KnownType::new("application/vnd.gov.sk.e-form+zip", "vnd.gov.sk.e-form+zip", Application, &[]),
    KnownType::new("application/vnd.gov.sk.xmldatacontainer+xml", "vnd.gov.sk.xmldatacontainer+xml", Application, &[]),
    KnownType::new("application/vnd.gpxsee.map+xml", "vnd.gpxsee.map+xml", Application, &[]),
    KnownType::new("application/vnd.grafeq", "vnd.grafeq", Application, &["gqf", "gqs"]),
    KnownType::new("application/vnd.gridmp", "vnd.gridmp", Application, &[]),
    KnownType::new("application/vnd.groove-account", "vnd.groove-account", Application, &["gac"]),
    KnownType::new("application/vnd.groove-help", "vnd.groove-help", Application, &["ghf"]),
    KnownType::new("application/vnd.groove-identity-message", "vnd.groove-identity-message", Application, &["gim"]),
    KnownType::new("application/vnd.groove-injector", "vnd.groove-injector", Application, &["grv"]),
    KnownType::new("application/vnd.groove-tool-message", "vnd.groove-tool-message", Application, &["gtm"]),
    KnownType::new("application/vnd.groove-tool-template", "vnd.groove-tool-template", Application, &["tpl"]),
    KnownType::new("application/vnd.groove-vcard", "vnd.groove-vcard", Application, &["vcg"]),
    KnownType::new("application/vnd.hal+json", "vnd.hal+json", Application, &[]),
    KnownType::new("application/vnd.hal+xml", "vnd.hal+xml", Application, &["hal"]),
    KnownType::new("application/vnd.handheld-entertainment+xml", "vnd.HandHeld-Entertainment+xml", Application, &["zmm"]),
    KnownType::new("application/vnd.hbci", "vnd.hbci", Application, &["hbci", "hbc", "kom", "upa", "pkd", "bpd"]),
    KnownType::new("application/vnd.hc+json", "vnd.hc+json", Application, &[]),
    KnownType::new("application/vnd.hcl-bireports", "vnd.hcl-bireports", Application, &[]),
    KnownType::new("application/vnd.hdt", "vnd.hdt", Application, &["hdt"]),
    KnownType::new("application/vnd.heroku+json", "vnd.heroku+json", Application, &[]),
    KnownType::new("application/vnd.hhe.lesson-player", "vnd.hhe.lesson-player", Application, &["les"]),
    KnownType::new("application/vnd.hp-hpgl", "vnd.hp-HPGL", Application, &["hpgl"]),
    KnownType::new("application/vnd.hp-hpid", "vnd.hp-hpid", Application, &["hpi", "hpid"]),
    KnownType::new("application/vnd.hp-hps", "vnd.hp-hps", Application, &["hps"]),
    KnownType::new("application/vnd.hp-jlyt", "vnd.hp-jlyt", Application, &["jlt"]),
    KnownType::new("application/vnd.hp-pcl", "vnd.hp-PCL", Application, &["pcl"]),
    KnownType::new("application/vnd.hp-pclxl", "vnd.hp-PCLXL", Application, &[]),
    KnownType::new("application/vnd.httphone", "vnd.httphone", Application, &[]),
    KnownType::new("application/vnd.hydrostatix.sof-data", "vnd.hydrostatix.sof-data", Application, &["sfd-hdstx"]),
    KnownType::new("application/vnd.hyper+json", "vnd.hyper+json", Application, &[]),
    KnownType::new("application/vnd.hyper-item+json", "vnd.hyper-item+json", Application, &[]),
    KnownType::new("application/vnd.hyperdrive+json", "vnd.hyperdrive+json", Application, &[]),
    KnownType::new("application/vnd.hzn-3d-crossword", "vnd.hzn-3d-crossword", Application, &[]),
    KnownType::new("application/vnd.ibm.electronic-media", "vnd.ibm.electronic-media", Application, &["emm"]),
    KnownType::new("application/vnd.ibm.minipay", "vnd.ibm.MiniPay", Application, &["mpy"]),
    KnownType::new("application/vnd.ibm.rights-management", "vnd.ibm.rights-management", Application, &["irm"]),
    KnownType::new("application/vnd.ibm.secure-container", "vnd.ibm.secure-container", Application, &["sc"]),
    KnownType::new("application/vnd.iccprofile", "vnd.iccprofile", Application, &["icc", "icm"]),
    KnownType::new("application/vnd.ieee.1905", "vnd.ieee.1905", Application, &["1905.1"]),
    KnownType::new("application/vnd.igloader", "vnd.igloader", Application, &["igl"]),
    KnownType::new("application/vnd.imagemeter.folder+zip", "vnd.imagemeter.folder+zip", Application, &["imf"]),
    KnownType::new("application/vnd.imagemeter.image+zip", "vnd.imagemeter.image+zip", Application, &["imi"]),
    KnownType::new("application/vnd.immervision-ivp", "vnd.immervision-ivp", Application, &["ivp"]),
    KnownType::new("application/vnd.immervision-ivu", "vnd.immervision-ivu", Application, &["ivu"]),
    KnownType::new("application/vnd.ims.imsccv1p1", "vnd.ims.imsccv1p1", Application, &["imscc"]),
    KnownType::new("application/vnd.ims.imsccv1p2", "vnd.ims.imsccv1p2", Application, &[]),
    KnownType::new("application/vnd.ims.imsccv1p3", "vnd.ims.imsccv1p3", Application, &[]),
    KnownType::new("application/vnd.ims.lis.v2.result+json", "vnd.ims.lis.v2.result+json", Application, &[]),
    KnownType::new("application/vnd.ims.lti.v2.toolconsumerprofile+json", "vnd.ims.lti.v2.toolconsumerprofile+json", Application, &[]),
    KnownType::new("application/vnd.ims.lti.v2.toolproxy+json", "vnd.ims.lti.v2.toolproxy+json", Application, &[]),
    KnownType::new("application/vnd.ims.lti.v2.toolproxy.id+json", "vnd.ims.lti.v2.toolproxy.id+json", Application, &[]),
    KnownType::new("application/vnd.ims.lti.v2.toolsettings+json", "vnd.ims.lti.v2.toolsettings+json", Application, &[]),
    KnownType::new("application/vnd.ims.lti.v2.toolsettings.simple+json", "vnd.ims.lti.v2.toolsettings.simple+json", Application, &[]),
    KnownType::new("application/vnd.informedcontrol.rms+xml", "vnd.informedcontrol.rms+xml", Application, &[]),
    KnownType::new("application/vnd.infotech.project", "vnd.infotech.project", Application, &[]),
    KnownType::new("application/vnd.infotech.project+xml", "vnd.infotech.project+xml", Application, &[]),
    KnownType::new("application/vnd.innopath.wamp.notification", "vnd.innopath.wamp.notification", Application, &[]),
    KnownType::new("application/vnd.insors.igm", "vnd.insors.igm", Application, &["igm"]),
    KnownType::new("application/vnd.intercon.formnet", "vnd.intercon.formnet", Application, &["xpw", "xpx"]),
    KnownType::new("application/vnd.intergeo", "vnd.intergeo", Application, &["i2g"]),
    KnownType::new("application/vnd.intertrust.digibox", "vnd.intertrust.digibox", Application, &[]),
    KnownType::new("application/vnd.intertrust.nncp", "vnd.intertrust.nncp", Application, &[]),
    KnownType::new("application/vnd.intu.qbo", "vnd.intu.qbo", Application, &["qbo"]),
    KnownType::new("application/vnd.intu.qfx", "vnd.intu.qfx", Application, &["qfx"]),
    KnownType::new("application/vnd.ipld.car", "vnd.ipld.car", Application, &["car"]),
    KnownType::new("application/vnd.ipld.dag-cbor", "vnd.ipld.dag-cbor", Application, &[]),
    KnownType::new("application/vnd.ipld.dag-json", "vnd.ipld.dag-json", Application, &[]),
    KnownType::new("application/vnd.ipld.raw", "vnd.ipld.raw", Application, &[]),
    KnownType::new("application/vnd.iptc.g2.catalogitem+xml", "vnd.iptc.g2.catalogitem+xml", Application, &[]),
    KnownType::new("application/vnd.iptc.g2.conceptitem+xml", "vnd.iptc.g2.conceptitem+xml", Application, &[]),
    KnownType::new("application/vnd.iptc.g2.knowledgeitem+xml", "vnd.iptc.g2.knowledgeitem+xml", Application, &[]),
    KnownType::new("application/vnd.iptc.g2.newsitem+xml", "vnd.iptc.g2.newsitem+xml", Application, &[]),
    KnownType::new("application/vnd.iptc.g2.newsmessage+xml", "vnd.iptc.g2.newsmessage+xml", Application, &[]),
    KnownType::new("application/vnd.iptc.g2.packageitem+xml", "vnd.iptc.g2.packageitem+xml", Application, &[]),
    KnownType::new("application/vnd.iptc.g2.planningitem+xml", "vnd.iptc.g2.planningitem+xml", Application, &[]),
    KnownType::new("application/vnd.ipunplugged.rcprofile", "vnd.ipunplugged.rcprofile", Application, &["rcprofile"]),
    KnownType::new("application/vnd.irepository.package+xml", "vnd.irepository.package+xml", Application, &["irp"]),
    KnownType::new("application/vnd.is-xpr", "vnd.is-xpr", Application, &["xpr"]),
    KnownType::new("application/vnd.isac.fcs", "vnd.isac.fcs", Application, &["fcs"]),
    KnownType::new("application/vnd.iso11783-10+zip", "vnd.iso11783-10+zip", Application, &[]),
    KnownType::new("application/vnd.jam", "vnd.jam", Application, &["jam"]),
    KnownType::new("application/vnd.japannet-directory-service", "vnd.japannet-directory-service", Application, &[]),
    KnownType::new("application/vnd.japannet-jpnstore-wakeup", "vnd.japannet-jpnstore-wakeup", Application, &[]),
    KnownType::new("application/vnd.japannet-payment-wakeup", "vnd.japannet-payment-wakeup", Application, &[]),
    KnownType::new("application/vnd.japannet-registration", "vnd.japannet-registration", Application, &[]),
    KnownType::new("application/vnd.japannet-registration-wakeup", "vnd.japannet-registration-wakeup", Application, &[]),
    KnownType::new("application/vnd.japannet-setstore-wakeup", "vnd.japannet-setstore-wakeup", Application, &[]),
    KnownType::new("application/vnd.japannet-verification", "vnd.japannet-verification", Application, &[]),
    KnownType::new("application/vnd.japannet-verification-wakeup", "vnd.japannet-verification-wakeup", Application, &[]),
    KnownType::new("application/vnd.jcp.javame.midlet-rms", "vnd.jcp.javame.midlet-rms", Application, &["rms"]),
    KnownType::new("application/vnd.jisp", "vnd.jisp", Application, &["jisp"]),
    KnownType::new("application/vnd.joost.joda-archive", "vnd.joost.joda-archive", Application, &["joda"]),
    KnownType::new("application/vnd.jsk.isdn-ngn", "vnd.jsk.isdn-ngn", Application, &[]),
    KnownType::new("application/vnd.kahootz", "vnd.kahootz", Application, &["ktz", "ktr"]),
    KnownType::new("application/vnd.kde.karbon", "vnd.kde.karbon", Application, &["karbon"]),
    KnownType::new("application/vnd.kde.kchart", "vnd.kde.kchart", Application, &["chrt"]),
    KnownType::new("application/vnd.kde.kformula", "vnd.kde.kformula", Application, &["kfo"]),
    KnownType::new("application/vnd.kde.kivio", "vnd.kde.kivio", Application, &["flw"]),
    KnownType::new("application/vnd.kde.kontour", "vnd.kde.kontour", Application, &["kon"]),
    KnownType::new("application/vnd.kde.kpresenter", "vnd.kde.kpresenter", Application, &["kpr", "kpt"]),
    KnownType::new("application/vnd.kde.kspread", "vnd.kde.kspread", Application, &["ksp"]),
    KnownType::new("application/vnd.kde.kword", "vnd.kde.kword", Application, &["kwd", "kwt"]),
    KnownType::new("application/vnd.kenameaapp", "vnd.kenameaapp", Application, &["htke"]),
    KnownType::new("application/vnd.kidspiration", "vnd.kidspiration", Application, &["kia"]),
    KnownType::new("application/vnd.kinar", "vnd.Kinar", Application, &["kne", "knp", "sdf"]),
    KnownType::new("application/vnd.koan", "vnd.koan", Application, &["skp", "skd", "skm", "skt"]),
    KnownType::new("application/vnd.kodak-descriptor", "vnd.kodak-descriptor", Application, &["sse"]),
    KnownType::new("application/vnd.las", "vnd.las", Application, &["las"]),
    KnownType::new("application/vnd.las.las+json", "vnd.las.las+json", Application, &["lasjson"]),
    KnownType::new("application/vnd.las.las+xml", "vnd.las.las+xml", Application, &["lasxml"]),
    KnownType::new("application/vnd.laszip", "vnd.laszip", Application, &[]),
    KnownType::new("application/vnd.leap+json", "vnd.leap+json", Application, &[]),
    KnownType::new("application/vnd.liberty-request+xml", "vnd.liberty-request+xml", Application, &[]),
    KnownType::new("application/vnd.llamagraphics.life-balance.desktop", "vnd.llamagraphics.life-balance.desktop", Application, &["lbd"]),
    KnownType::new("application/vnd.llamagraphics.life-balance.exchange+xml", "vnd.llamagraphics.life-balance.exchange+xml", Application, &["lbe"]),
    KnownType::new("application/vnd.logipipe.circuit+zip", "vnd.logipipe.circuit+zip", Application, &["lcs", "lca"]),
    KnownType::new("application/vnd.loom", "vnd.loom", Application, &["loom"]),
    KnownType::new("application/vnd.lotus-1-2-3", "vnd.lotus-1-2-3", Application, &["123", "wk4", "wk3", "wk1"]),
    KnownType::new("application/vnd.lotus-approach", "vnd.lotus-approach", Application, &["apr", "vew"]),
    KnownType::new("application/vnd.lotus-freelance", "vnd.lotus-freelance", Application, &["prz", "pre"]),
    KnownType::new("application/vnd.lotus-notes", "vnd.lotus-notes", Application, &["nsf", "ntf", "ndl", "ns4", "ns3", "ns2", "nsh", "nsg"]),
    KnownType::new("application/vnd.lotus-organizer", "vnd.lotus-organizer", Application, &["or3", "or2", "org"]),
    KnownType::new("application/vnd.lotus-screencam", "vnd.lotus-screencam", Application, &["scm"]),
    KnownType::new("application/vnd.lotus-wordpro", "vnd.lotus-wordpro", Application, &["lwp", "sam"]),
    KnownType::new("application/vnd.macports.portpkg", "vnd.macports.portpkg", Application, &["portpkg"]),
    KnownType::new("application/vnd.mapbox-vector-tile", "vnd.mapbox-vector-tile", Application, &["mvt"]),
    KnownType::new("application/vnd.marlin.drm.actiontoken+xml", "vnd.marlin.drm.actiontoken+xml", Application, &[]),
    KnownType::new("application/vnd.marlin.drm.conftoken+xml", "vnd.marlin.drm.conftoken+xml", Application, &[]),
    KnownType::new("application/vnd.marlin.drm.license+xml", "vnd.marlin.drm.license+xml", Application, &[]),
    KnownType::new("application/vnd.marlin.drm.mdcf", "vnd.marlin.drm.mdcf", Application, &["mdc"]),
    KnownType::new("application/vnd.mason+json", "vnd.mason+json", Application, &[]),
    KnownType::new("application/vnd.maxar.archive.3tz+zip", "vnd.maxar.archive.3tz+zip", Application, &["3tz"]),
    KnownType::new("application/vnd.maxmind.maxmind-db", "vnd.maxmind.maxmind-db", Application, &["mmdb"]),
    KnownType::new("application/vnd.mcd", "vnd.mcd", Application, &["mcd"]),
    KnownType::new("application/vnd.medcalcdata", "vnd.medcalcdata", Application, &["mc1"]),
    KnownType::new("application/vnd.mediastation.cdkey", "vnd.mediastation.cdkey", Application, &["cdkey"]),
    KnownType::new("application/vnd.medicalholodeck.recordxr", "vnd.medicalholodeck.recordxr", Application, &["rxt"]),
    KnownType::new("application/vnd.meridian-slingshot", "vnd.meridian-slingshot", Application, &[]),
    KnownType::new("application/vnd.mfer", "vnd.MFER", Application, &["mwf"]),
    KnownType::new("application/vnd.mfmp", "vnd.mfmp", Application, &["mfm"]),
    KnownType::new("application/vnd.micro+json", "vnd.micro+json", Application, &[]),
    KnownType::new("application/vnd.micrografx.flo", "vnd.micrografx.flo", Application, &["flo"]),
    KnownType::new("application/vnd.micrografx.igx", "vnd.micrografx.igx", Application, &["igx"]),
    KnownType::new("application/vnd.microsoft.portable-executable", "vnd.microsoft.portable-executable", Application, &[]),
    KnownType::new("application/vnd.microsoft.windows.thumbnail-cache", "vnd.microsoft.windows.thumbnail-cache", Application, &[]),
    KnownType::new("application/vnd.miele+json", "vnd.miele+json", Application, &[]),
    KnownType::new("application/vnd.mif", "vnd.mif", Application, &["mif"]),
    KnownType::new("application/vnd.minisoft-hp3000-save", "vnd.minisoft-hp3000-save", Application, &[]),
    KnownType::new("application/vnd.mitsubishi.misty-guard.trustweb", "vnd.mitsubishi.misty-guard.trustweb", Application, &[]),
    KnownType::new("application/vnd.mobius.daf", "vnd.Mobius.DAF", Application, &["daf"]),
    KnownType::new("application/vnd.mobius.dis", "vnd.Mobius.DIS", Application, &["dis"]),
    KnownType::new("application/vnd.mobius.mbk", "vnd.Mobius.MBK", Application, &["mbk"]),
    KnownType::new("application/vnd.mobius.mqy", "vnd.Mobius.MQY", Application, &["mqy"]),
    KnownType::new("application/vnd.mobius.msl", "vnd.Mobius.MSL", Application, &["msl"]),
    KnownType::new("application/vnd.mobius.plc", "vnd.Mobius.PLC", Application, &["plc"]),
    KnownType::new("application/vnd.mobius.txf", "vnd.Mobius.TXF", Application, &["txf"]),
    KnownType::new("application/vnd.mophun.application", "vnd.mophun.application", Application, &["mpn"]),
    KnownType::new("application/vnd.mophun.certificate", "vnd.mophun.certificate", Application, &["mpc"]),
    KnownType::new("application/vnd.motorola.flexsuite", "vnd.motorola.flexsuite", Application, &[]),
    KnownType::new("application/vnd.motorola.flexsuite.adsi", "vnd.motorola.flexsuite.adsi", Application, &[]),
    KnownType::new("application/vnd.motorola.flexsuite.fis", "vnd.motorola.flexsuite.fis", Application, &[]),
    KnownType::new("application/vnd.motorola.flexsuite.gotap", "vnd.motorola.flexsuite.gotap", Application, &[]),
    KnownType::new("application/vnd.motorola.flexsuite.kmr", "vnd.motorola.flexsuite.kmr", Application, &[]),
    KnownType::new("application/vnd.motorola.flexsuite.ttc", "vnd.motorola.flexsuite.ttc", Application, &[]),
    KnownType::new("application/vnd.motorola.flexsuite.wem", "vnd.motorola.flexsuite.wem", Application, &[]),
    KnownType::new("application/vnd.motorola.iprm", "vnd.motorola.iprm", Application, &[]),
    KnownType::new("application/vnd.mozilla.xul+xml", "vnd.mozilla.xul+xml", Application, &["xul"]),
    KnownType::new("application/vnd.ms-3mfdocument", "vnd.ms-3mfdocument", Application, &["3mf"]),
    KnownType::new("application/vnd.ms-artgalry", "vnd.ms-artgalry", Application, &["cil"]),
    KnownType::new("application/vnd.ms-asf", "vnd.ms-asf", Application, &["asf"]),
    KnownType::new("application/vnd.ms-cab-compressed", "vnd.ms-cab-compressed", Application, &["cab"]),
    KnownType::new("application/vnd.ms-excel", "vnd.ms-excel", Application, &["xls", "xlm", "xla", "xlc", "xlt", "xlw"]),
    KnownType::new("application/vnd.ms-excel.addin.macroenabled.12", "vnd.ms-excel.addin.macroEnabled.12", Application, &["xlam"]),
    KnownType::new("application/vnd.ms-excel.sheet.binary.macroenabled.12", "vnd.ms-excel.sheet.binary.macroEnabled.12", Application, &["xlsb"]),
    KnownType::new("application/vnd.ms-excel.sheet.macroenabled.12", "vnd.ms-excel.sheet.macroEnabled.12", Application, &["xlsm"]),
    KnownType::new("application/vnd.ms-excel.template.macroenabled.12", "vnd.ms-excel.template.macroEnabled.12", Application, &["xltm"]),
    KnownType::new("application/vnd.ms-fontobject", "vnd.ms-fontobject", Application, &["eot"]),
    KnownType::new("application/vnd.ms-htmlhelp", "vnd.ms-htmlhelp", Application, &["chm"]),
    KnownType::new("application/vnd.ms-ims", "vnd.ms-ims", Application, &["ims"]),
    KnownType::new("application/vnd.ms-lrm", "vnd.ms-lrm", Application, &["lrm"]),
    KnownType::new("application/vnd.ms-office.activex+xml", "vnd.ms-office.activeX+xml", Application, &[]),
    KnownType::new("application/vnd.ms-officetheme", "vnd.ms-officetheme", Application, &["thmx"]),
    KnownType::new("application/vnd.ms-pki.seccat", "vnd.ms-pki.seccat", Application, &["cat"]),
    KnownType::new("application/vnd.ms-playready.initiator+xml", "vnd.ms-playready.initiator+xml", Application, &[]),
    KnownType::new("application/vnd.ms-powerpoint", "vnd.ms-powerpoint", Application, &["ppt", "pps"]),
    KnownType::new("application/vnd.ms-powerpoint.addin.macroenabled.12", "vnd.ms-powerpoint.addin.macroEnabled.12", Application, &["ppam"]),
    KnownType::new("application/vnd.ms-powerpoint.presentation.macroenabled.12", "vnd.ms-powerpoint.presentation.macroEnabled.12", Application, &["pptm"]),
    KnownType::new("application/vnd.ms-powerpoint.slide.macroenabled.12", "vnd.ms-powerpoint.slide.macroEnabled.12", Application, &["sldm"]),
    KnownType::new("application/vnd.ms-powerpoint.slideshow.macroenabled.12", "vnd.ms-powerpoint.slideshow.macroEnabled.12", Application, &["ppsm"]),
    KnownType::new("application/vnd.ms-powerpoint.template.macroenabled.12", "vnd.ms-powerpoint.template.macroEnabled.12", Application, &["potm"]),
    KnownType::new("application/vnd.ms-printdevicecapabilities+xml", "vnd.ms-PrintDeviceCapabilities+xml", Application, &[]),
    KnownType::new("application/vnd.ms-printschematicket+xml", "vnd.ms-PrintSchemaTicket+xml", Application, &[]),
    KnownType::new("application/vnd.ms-project", "vnd.ms-project", Application, &["mpp", "mpt"]),
    KnownType::new("application/vnd.ms-tnef", "vnd.ms-tnef", Application, &["tnef", "tnf"]),
    KnownType::new("application/vnd.ms-windows.devicepairing", "vnd.ms-windows.devicepairing", Application, &[]),
    KnownType::new("application/vnd.ms-windows.nwprinting.oob", "vnd.ms-windows.nwprinting.oob", Application, &[]),
    KnownType::new("application/vnd.ms-windows.printerpairing", "vnd.ms-windows.printerpairing", Application, &[]),
    KnownType::new("application/vnd.ms-windows.wsd.oob", "vnd.ms-windows.wsd.oob", Application, &[]),
    KnownType::new("application/vnd.ms-wmdrm.lic-chlg-req", "vnd.ms-wmdrm.lic-chlg-req", Application, &[]),
    KnownType::new("application/vnd.ms-wmdrm.lic-resp", "vnd.ms-wmdrm.lic-resp", Application, &[]),
    KnownType::new("application/vnd.ms-wmdrm.meter-chlg-req", "vnd.ms-wmdrm.meter-chlg-req", Application, &[]),
    KnownType::new("application/vnd.ms-wmdrm.meter-resp", "vnd.ms-wmdrm.meter-resp", Application, &[]),
    KnownType::new("application/vnd.ms-word.document.macroenabled.12", "vnd.ms-word.document.macroEnabled.12", Application, &["docm"]),
    KnownType::new("application/vnd.ms-word.template.macroenabled.12", "vnd.ms-word.template.macroEnabled.12", Application, &["dotm"]),
    KnownType::new("application/vnd.ms-works", "vnd.ms-works", Application, &["wcm", "wdb", "wks", "wps"]),
    KnownType::new("application/vnd.ms-wpl", "vnd.ms-wpl", Application, &["wpl"]),
    KnownType::new("application/vnd.ms-xpsdocument", "vnd.ms-xpsdocument", Application, &["xps"]),
    KnownType::new("application/vnd.msa-disk-image", "vnd.msa-disk-image", Application, &["msa"]),
    KnownType::new("application/vnd.mseq", "vnd.mseq", Application, &["mseq"]),
    KnownType::new("application/vnd.msign", "vnd.msign", Application, &[]),
    KnownType::new("application/vnd.multiad.creator", "vnd.multiad.creator", Application, &["crtr"]),
    KnownType::new("application/vnd.multiad.creator.cif", "vnd.multiad.creator.cif", Application, &["cif"]),
    KnownType::new("application/vnd.music-niff", "vnd.music-niff", Application, &[]),
    KnownType::new("application/vnd.musician", "vnd.musician", Application, &["mus"]),
    KnownType::new("application/vnd.muvee.style", "vnd.muvee.style", Application, &["msty"]),
    KnownType::new("application/vnd.mynfc", "vnd.mynfc", Application, &["taglet"]),
    KnownType::new("application/vnd.nacamar.ybrid+json", "vnd.nacamar.ybrid+json", Application, &[]),
    KnownType::new("application/vnd.ncd.control", "vnd.ncd.control", Application, &[]),
    KnownType::new("application/vnd.ncd.reference", "vnd.ncd.reference", Application, &[]),
    KnownType::new("application/vnd.nearst.inv+json", "vnd.nearst.inv+json", Application, &[]),
    KnownType::new("application/vnd.nebumind.line", "vnd.nebumind.line", Application, &["nebul", "line"]),
    KnownType::new("application/vnd.nervana", "vnd.nervana", Application, &["entity", "request", "bkm", "kcm"]),
    KnownType::new("application/vnd.netfpx", "vnd.netfpx", Application, &[]),
    KnownType::new("application/vnd.neurolanguage.nlu", "vnd.neurolanguage.nlu", Application, &["nlu"]),
    KnownType::new("application/vnd.nimn", "vnd.nimn", Application, &["nimn"]),
    KnownType::new("application/vnd.nintendo.nitro.rom", "vnd.nintendo.nitro.rom", Application, &["nds"]),
    KnownType::new("application/vnd.nintendo.snes.rom", "vnd.nintendo.snes.rom", Application, &["sfc", "smc"]),
    KnownType::new("application/vnd.nitf", "vnd.nitf", Application, &["nitf"]),
    KnownType::new("application/vnd.noblenet-directory", "vnd.noblenet-directory", Application, &["nnd"]),
    KnownType::new("application/vnd.noblenet-sealer", "vnd.noblenet-sealer", Application, &["nns"]),
    KnownType::new("application/vnd.noblenet-web", "vnd.noblenet-web", Application, &["nnw"]),
    KnownType::new("application/vnd.nokia.catalogs", "vnd.nokia.catalogs", Application, &[]),
    KnownType::new("application/vnd.nokia.conml+wbxml", "vnd.nokia.conml+wbxml", Application, &[]),
    KnownType::new("application/vnd.nokia.conml+xml", "vnd.nokia.conml+xml", Application, &[]),
    KnownType::new("application/vnd.nokia.iptv.config+xml", "vnd.nokia.iptv.config+xml", Application, &[]),
    KnownType::new("application/vnd.nokia.isds-radio-presets", "vnd.nokia.iSDS-radio-presets", Application, &[]),
    KnownType::new("application/vnd.nokia.landmark+wbxml", "vnd.nokia.landmark+wbxml", Application, &[]),
    KnownType::new("application/vnd.nokia.landmark+xml", "vnd.nokia.landmark+xml", Application, &[]),
    KnownType::new("application/vnd.nokia.landmarkcollection+xml", "vnd.nokia.landmarkcollection+xml", Application, &[]),
    KnownType::new("application/vnd.nokia.n-gage.ac+xml", "vnd.nokia.n-gage.ac+xml", Application, &[]),
    KnownType::new("application/vnd.nokia.n-gage.data", "vnd.nokia.n-gage.data", Application, &["ngdat"]),
    KnownType::new("application/vnd.nokia.ncd", "vnd.nokia.ncd", Application, &[]),
    KnownType::new("application/vnd.nokia.pcd+wbxml", "vnd.nokia.pcd+wbxml", Application, &[]),
    KnownType::new("application/vnd.nokia.pcd+xml", "vnd.nokia.pcd+xml", Application, &[]),
    KnownType::new("application/vnd.nokia.radio-preset", "vnd.nokia.radio-preset", Application, &["rpst"]),
    KnownType::new("application/vnd.nokia.radio-presets", "vnd.nokia.radio-presets", Application, &["rpss"]),
    KnownType::new("application/vnd.novadigm.edm", "vnd.novadigm.EDM", Application, &["edm"]),
    KnownType::new("application/vnd.novadigm.edx", "vnd.novadigm.EDX", Application, &["edx"]),
    KnownType::new("application/vnd.novadigm.ext", "vnd.novadigm.EXT", Application, &["ext"]),
    KnownType::new("application/vnd.ntt-local.content-share", "vnd.ntt-local.content-share", Application, &[]),
    KnownType::new("application/vnd.ntt-local.file-transfer", "vnd.ntt-local.file-transfer", Application, &[]),
    KnownType::new("application/vnd.ntt-local.ogw_remote-access", "vnd.ntt-local.ogw_remote-access", Application, &[]),
    KnownType::new("application/vnd.ntt-local.sip-ta_remote", "vnd.ntt-local.sip-ta_remote", Application, &[]),
    KnownType::new("application/vnd.ntt-local.sip-ta_tcp_stream", "vnd.ntt-local.sip-ta_tcp_stream", Application, &[]),
    KnownType::new("application/vnd.oasis.opendocument.base", "vnd.oasis.opendocument.base", Application, &["odb"]),
    KnownType::new("application/vnd.oasis.opendocument.chart", "vnd.oasis.opendocument.chart", Application, &["odc"]),
    KnownType::new("application/vnd.oasis.opendocument.chart-template", "vnd.oasis.opendocument.chart-template", Application, &["otc"]),
    KnownType::new("application/vnd.oasis.opendocument.formula", "vnd.oasis.opendocument.formula", Application, &["odf"]),
    KnownType::new("application/vnd.oasis.opendocument.formula-template", "vnd.oasis.opendocument.formula-template", Application, &[]),
    KnownType::new("application/vnd.oasis.opendocument.graphics", "vnd.oasis.opendocument.graphics", Application, &["odg"]),
    KnownType::new("application/vnd.oasis.opendocument.graphics-template", "vnd.oasis.opendocument.graphics-template", Application, &["otg"]),
    KnownType::new("application/vnd.oasis.opendocument.image", "vnd.oasis.opendocument.image", Application, &["odi"]),
    KnownType::new("application/vnd.oasis.opendocument.image-template", "vnd.oasis.opendocument.image-template", Application, &["oti"]),
    KnownType::new("application/vnd.oasis.opendocument.presentation", "vnd.oasis.opendocument.presentation", Application, &["odp"]),
    KnownType::new("application/vnd.oasis.opendocument.presentation-template", "vnd.oasis.opendocument.presentation-template", Application, &["otp"]),
    KnownType::new("application/vnd.oasis.opendocument.spreadsheet", "vnd.oasis.opendocument.spreadsheet", Application, &["ods"]),
    KnownType::new("application/vnd.oasis.opendocument.spreadsheet-template", "vnd.oasis.opendocument.spreadsheet-template", Application, &["ots"]),
    KnownType::new("application/vnd.oasis.opendocument.text", "vnd.oasis.opendocument.text", Application, &["odt"]),
    KnownType::new("application/vnd.oasis.opendocument.text-master", "vnd.oasis.opendocument.text-master", Application, &["odm"]),
    KnownType::new("application/vnd.oasis.opendocument.text-template", "vnd.oasis.opendocument.text-template", Application, &["ott"]),
    KnownType::new("application/vnd.oasis.opendocument.text-web", "vnd.oasis.opendocument.text-web", Application, &["oth"]),
    KnownType::new("application/vnd.obn", "vnd.obn", Application, &[]),
    KnownType::new("application/vnd.ocf+cbor", "vnd.ocf+cbor", Application, &[]),
    KnownType::new("application/vnd.oci.image.manifest.v1+json", "vnd.oci.image.manifest.v1+json", Application, &[]),
    KnownType::new("application/vnd.oftn.l10n+json", "vnd.oftn.l10n+json", Application, &[]),
    KnownType::new("application/vnd.oipf.contentaccessdownload+xml", "vnd.oipf.contentaccessdownload+xml", Application, &[]),
    KnownType::new("application/vnd.oipf.contentaccessstreaming+xml", "vnd.oipf.contentaccessstreaming+xml", Application, &[]),
    KnownType::new("application/vnd.oipf.cspg-hexbinary", "vnd.oipf.cspg-hexbinary", Application, &[]),
    KnownType::new("application/vnd.oipf.dae.svg+xml", "vnd.oipf.dae.svg+xml", Application, &[]),
    KnownType::new("application/vnd.oipf.dae.xhtml+xml", "vnd.oipf.dae.xhtml+xml", Application, &[]),
    KnownType::new("application/vnd.oipf.mippvcontrolmessage+xml", "vnd.oipf.mippvcontrolmessage+xml", Application, &[]),
    KnownType::new("application/vnd.oipf.pae.gem", "vnd.oipf.pae.gem", Application, &[]),
    KnownType::new("application/vnd.oipf.spdiscovery+xml", "vnd.oipf.spdiscovery+xml", Application, &[]),
    KnownType::new("application/vnd.oipf.spdlist+xml", "vnd.oipf.spdlist+xml", Application, &[]),
    KnownType::new("application/vnd.oipf.ueprofile+xml", "vnd.oipf.ueprofile+xml", Application, &[]),
    KnownType::new("application/vnd.oipf.userprofile+xml", "vnd.oipf.userprofile+xml", Application, &[]),
    KnownType::new("application/vnd.olpc-sugar", "vnd.olpc-sugar", Application, &["xo"]),
    KnownType::new("application/vnd.oma-scws-config", "vnd.oma-scws-config", Application, &[]),
    KnownType::new("application/vnd.oma-scws-http-request", "vnd.oma-scws-http-request", Application, &[]),
    KnownType::new("application/vnd.oma-scws-http-response", "vnd.oma-scws-http-response", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.associated-procedure-parameter+xml", "vnd.oma.bcast.associated-procedure-parameter+xml", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.drm-trigger+xml", "vnd.oma.bcast.drm-trigger+xml", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.imd+xml", "vnd.oma.bcast.imd+xml", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.ltkm", "vnd.oma.bcast.ltkm", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.notification+xml", "vnd.oma.bcast.notification+xml", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.provisioningtrigger", "vnd.oma.bcast.provisioningtrigger", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.sgboot", "vnd.oma.bcast.sgboot", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.sgdd+xml", "vnd.oma.bcast.sgdd+xml", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.sgdu", "vnd.oma.bcast.sgdu", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.simple-symbol-container", "vnd.oma.bcast.simple-symbol-container", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.smartcard-trigger+xml", "vnd.oma.bcast.smartcard-trigger+xml", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.sprov+xml", "vnd.oma.bcast.sprov+xml", Application, &[]),
    KnownType::new("application/vnd.oma.bcast.stkm", "vnd.oma.bcast.stkm", Application, &[]),
    KnownType::new("application/vnd.oma.cab-address-book+xml", "vnd.oma.cab-address-book+xml", Application, &[]),
    KnownType::new("application/vnd.oma.cab-feature-handler+xml", "vnd.oma.cab-feature-handler+xml", Application, &[]),
    KnownType::new("application/vnd.oma.cab-pcc+xml", "vnd.oma.cab-pcc+xml", Application, &[]),
    KnownType::new("application/vnd.oma.cab-subs-invite+xml", "vnd.oma.cab-subs-invite+xml", Application, &[]),
    KnownType::new("application/vnd.oma.cab-user-prefs+xml", "vnd.oma.cab-user-prefs+xml", Application, &[]),
    KnownType::new("application/vnd.oma.dcd", "vnd.oma.dcd", Application, &[]),
    KnownType::new("application/vnd.oma.dcdc", "vnd.oma.dcdc", Application, &[]),
    KnownType::new("application/vnd.oma.dd2+xml", "vnd.oma.dd2+xml", Application, &["dd2"]),
    KnownType::new("application/vnd.oma.drm.risd+xml", "vnd.oma.drm.risd+xml", Application, &[]),
    KnownType::new("application/vnd.oma.group-usage-list+xml", "vnd.oma.group-usage-list+xml", Application, &[]),
    KnownType::new("application/vnd.oma.lwm2m+cbor", "vnd.oma.lwm2m+cbor", Application, &[]),
    KnownType::new("application/vnd.oma.lwm2m+json", "vnd.oma.lwm2m+json", Application, &[]),
    KnownType::new("application/vnd.oma.lwm2m+tlv", "vnd.oma.lwm2m+tlv", Application, &[]),
    KnownType::new("application/vnd.oma.pal+xml", "vnd.oma.pal+xml", Application, &[]),
    KnownType::new("application/vnd.oma.poc.detailed-progress-report+xml", "vnd.oma.poc.detailed-progress-report+xml", Application, &[]),
    KnownType::new("application/vnd.oma.poc.final-report+xml", "vnd.oma.poc.final-report+xml", Application, &[]),
    KnownType::new("application/vnd.oma.poc.groups+xml", "vnd.oma.poc.groups+xml", Application, &[]),
    KnownType::new("application/vnd.oma.poc.invocation-descriptor+xml", "vnd.oma.poc.invocation-descriptor+xml", Application, &[]),
    KnownType::new("application/vnd.oma.poc.optimized-progress-report+xml", "vnd.oma.poc.optimized-progress-report+xml", Application, &[]),
    KnownType::new("application/vnd.oma.push", "vnd.oma.push", Application, &[]),
    KnownType::new("application/vnd.oma.scidm.messages+xml", "vnd.oma.scidm.messages+xml", Application, &[]),
    KnownType::new("application/vnd.oma.xcap-directory+xml", "vnd.oma.xcap-directory+xml", Application, &[]),
    KnownType::new("application/vnd.omads-email+xml", "vnd.omads-email+xml", Application, &[]),
    KnownType::new("application/vnd.omads-file+xml", "vnd.omads-file+xml", Application, &[]),
    KnownType::new("application/vnd.omads-folder+xml", "vnd.omads-folder+xml", Application, &[]),
    KnownType::new("application/vnd.omaloc-supl-init", "vnd.omaloc-supl-init", Application, &[]),
    KnownType::new("application/vnd.onepager", "vnd.onepager", Application, &["tam"]),
    KnownType::new("application/vnd.onepagertamp", "vnd.onepagertamp", Application, &["tamp"]),
    KnownType::new("application/vnd.onepagertamx", "vnd.onepagertamx", Application, &["tamx"]),
    KnownType::new("application/vnd.onepagertat", "vnd.onepagertat", Application, &["tat"]),
    KnownType::new("application/vnd.onepagertatp", "vnd.onepagertatp", Application, &["tatp"]),
    KnownType::new("application/vnd.onepagertatx", "vnd.onepagertatx", Application, &["tatx"]),
    KnownType::new("application/vnd.onvif.metadata", "vnd.onvif.metadata", Application, &[]),
    KnownType::new("application/vnd.openblox.game+xml", "vnd.openblox.game+xml", Application, &["obgx"]),
    KnownType::new("application/vnd.openblox.game-binary", "vnd.openblox.game-binary", Application, &["obg"]),
    KnownType::new("application/vnd.openeye.oeb", "vnd.openeye.oeb", Application, &["oeb"]),
    KnownType::new("application/vnd.openofficeorg.extension", "vnd.openofficeorg.extension", Application, &["oxt"]),
    KnownType::new("application/vnd.openstreetmap.data+xml", "vnd.openstreetmap.data+xml", Application, &["osm"]),
    KnownType::new("application/vnd.opentimestamps.ots", "vnd.opentimestamps.ots", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.custom-properties+xml", "vnd.openxmlformats-officedocument.custom-properties+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.customxmlproperties+xml", "vnd.openxmlformats-officedocument.customXmlProperties+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.drawing+xml", "vnd.openxmlformats-officedocument.drawing+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.drawingml.chart+xml", "vnd.openxmlformats-officedocument.drawingml.chart+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.drawingml.chartshapes+xml", "vnd.openxmlformats-officedocument.drawingml.chartshapes+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramcolors+xml", "vnd.openxmlformats-officedocument.drawingml.diagramColors+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramdata+xml", "vnd.openxmlformats-officedocument.drawingml.diagramData+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramlayout+xml", "vnd.openxmlformats-officedocument.drawingml.diagramLayout+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramstyle+xml", "vnd.openxmlformats-officedocument.drawingml.diagramStyle+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.extended-properties+xml", "vnd.openxmlformats-officedocument.extended-properties+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.commentauthors+xml", "vnd.openxmlformats-officedocument.presentationml.commentAuthors+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.comments+xml", "vnd.openxmlformats-officedocument.presentationml.comments+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.handoutmaster+xml", "vnd.openxmlformats-officedocument.presentationml.handoutMaster+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.notesmaster+xml", "vnd.openxmlformats-officedocument.presentationml.notesMaster+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.notesslide+xml", "vnd.openxmlformats-officedocument.presentationml.notesSlide+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.presentation", "vnd.openxmlformats-officedocument.presentationml.presentation", Application, &["pptx"]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml", "vnd.openxmlformats-officedocument.presentationml.presentation.main+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.presprops+xml", "vnd.openxmlformats-officedocument.presentationml.presProps+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.slide", "vnd.openxmlformats-officedocument.presentationml.slide", Application, &["sldx"]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.slide+xml", "vnd.openxmlformats-officedocument.presentationml.slide+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.slidelayout+xml", "vnd.openxmlformats-officedocument.presentationml.slideLayout+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.slidemaster+xml", "vnd.openxmlformats-officedocument.presentationml.slideMaster+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.slideshow", "vnd.openxmlformats-officedocument.presentationml.slideshow", Application, &["ppsx"]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.slideshow.main+xml", "vnd.openxmlformats-officedocument.presentationml.slideshow.main+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.slideupdateinfo+xml", "vnd.openxmlformats-officedocument.presentationml.slideUpdateInfo+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.tablestyles+xml", "vnd.openxmlformats-officedocument.presentationml.tableStyles+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.tags+xml", "vnd.openxmlformats-officedocument.presentationml.tags+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.template", "vnd.openxmlformats-officedocument.presentationml.template", Application, &["potx"]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.template.main+xml", "vnd.openxmlformats-officedocument.presentationml.template.main+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.presentationml.viewprops+xml", "vnd.openxmlformats-officedocument.presentationml.viewProps+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.calcchain+xml", "vnd.openxmlformats-officedocument.spreadsheetml.calcChain+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.chartsheet+xml", "vnd.openxmlformats-officedocument.spreadsheetml.chartsheet+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.comments+xml", "vnd.openxmlformats-officedocument.spreadsheetml.comments+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.connections+xml", "vnd.openxmlformats-officedocument.spreadsheetml.connections+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.dialogsheet+xml", "vnd.openxmlformats-officedocument.spreadsheetml.dialogsheet+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.externallink+xml", "vnd.openxmlformats-officedocument.spreadsheetml.externalLink+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.pivotcachedefinition+xml", "vnd.openxmlformats-officedocument.spreadsheetml.pivotCacheDefinition+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.pivotcacherecords+xml", "vnd.openxmlformats-officedocument.spreadsheetml.pivotCacheRecords+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.pivottable+xml", "vnd.openxmlformats-officedocument.spreadsheetml.pivotTable+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.querytable+xml", "vnd.openxmlformats-officedocument.spreadsheetml.queryTable+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.revisionheaders+xml", "vnd.openxmlformats-officedocument.spreadsheetml.revisionHeaders+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.revisionlog+xml", "vnd.openxmlformats-officedocument.spreadsheetml.revisionLog+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sharedstrings+xml", "vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "vnd.openxmlformats-officedocument.spreadsheetml.sheet", Application, &["xlsx"]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml", "vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheetmetadata+xml", "vnd.openxmlformats-officedocument.spreadsheetml.sheetMetadata+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml", "vnd.openxmlformats-officedocument.spreadsheetml.styles+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.table+xml", "vnd.openxmlformats-officedocument.spreadsheetml.table+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.tablesinglecells+xml", "vnd.openxmlformats-officedocument.spreadsheetml.tableSingleCells+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.template", "vnd.openxmlformats-officedocument.spreadsheetml.template", Application, &["xltx"]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml", "vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.usernames+xml", "vnd.openxmlformats-officedocument.spreadsheetml.userNames+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.volatiledependencies+xml", "vnd.openxmlformats-officedocument.spreadsheetml.volatileDependencies+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml", "vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.theme+xml", "vnd.openxmlformats-officedocument.theme+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.themeoverride+xml", "vnd.openxmlformats-officedocument.themeOverride+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.vmldrawing", "vnd.openxmlformats-officedocument.vmlDrawing", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.comments+xml", "vnd.openxmlformats-officedocument.wordprocessingml.comments+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.document", "vnd.openxmlformats-officedocument.wordprocessingml.document", Application, &["docx"]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.document.glossary+xml", "vnd.openxmlformats-officedocument.wordprocessingml.document.glossary+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml", "vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.endnotes+xml", "vnd.openxmlformats-officedocument.wordprocessingml.endnotes+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.fonttable+xml", "vnd.openxmlformats-officedocument.wordprocessingml.fontTable+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml", "vnd.openxmlformats-officedocument.wordprocessingml.footer+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.footnotes+xml", "vnd.openxmlformats-officedocument.wordprocessingml.footnotes+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml", "vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml", "vnd.openxmlformats-officedocument.wordprocessingml.settings+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml", "vnd.openxmlformats-officedocument.wordprocessingml.styles+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.template", "vnd.openxmlformats-officedocument.wordprocessingml.template", Application, &["dotx"]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml", "vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.websettings+xml", "vnd.openxmlformats-officedocument.wordprocessingml.webSettings+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-package.core-properties+xml", "vnd.openxmlformats-package.core-properties+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-package.digital-signature-xmlsignature+xml", "vnd.openxmlformats-package.digital-signature-xmlsignature+xml", Application, &[]),
    KnownType::new("application/vnd.openxmlformats-package.relationships+xml", "vnd.openxmlformats-package.relationships+xml", Application, &[]),
    KnownType::new("application/vnd.oracle.resource+json", "vnd.oracle.resource+json", Application, &[]),
    KnownType::new("application/vnd.orange.indata", "vnd.orange.indata", Application, &[]),
    KnownType::new("application/vnd.osa.netdeploy", "vnd.osa.netdeploy", Application, &["ndc"]),
    KnownType::new("application/vnd.osgeo.mapguide.package", "vnd.osgeo.mapguide.package", Application, &["mgp"]),
    KnownType::new("application/vnd.osgi.bundle", "vnd.osgi.bundle", Application, &[]),
    KnownType::new("application/vnd.osgi.dp", "vnd.osgi.dp", Application, &["dp"]),
    KnownType::new("application/vnd.osgi.subsystem", "vnd.osgi.subsystem", Application, &["esa"]),
    KnownType::new("application/vnd.otps.ct-kip+xml", "vnd.otps.ct-kip+xml", Application, &[]),
    KnownType::new("application/vnd.oxli.countgraph", "vnd.oxli.countgraph", Application, &["oxlicg"]),
    KnownType::new("application/vnd.pagerduty+json", "vnd.pagerduty+json", Application, &[]),
    KnownType::new("application/vnd.palm", "vnd.palm", Application, &["pdb", "pqa", "oprc"]),
    KnownType::new("application/vnd.panoply", "vnd.panoply", Application, &["plp"]),
    KnownType::new("application/vnd.paos.xml", "vnd.paos.xml", Application, &[]),
    KnownType::new("application/vnd.patentdive", "vnd.patentdive", Application, &["dive"]),
    KnownType::new("application/vnd.patientecommsdoc", "vnd.patientecommsdoc", Application, &[]),
    KnownType::new("application/vnd.pawaafile", "vnd.pawaafile", Application, &["paw"]),
    KnownType::new("application/vnd.pcos", "vnd.pcos", Application, &[]),
    KnownType::new("application/vnd.pg.format", "vnd.pg.format", Application, &["str"]),
    KnownType::new("application/vnd.pg.osasli", "vnd.pg.osasli", Application, &["ei6"]),
    KnownType::new("application/vnd.piaccess.application-licence", "vnd.piaccess.application-licence", Application, &["pil"]),
    KnownType::new("application/vnd.picsel", "vnd.picsel", Application, &["efif"]),
    KnownType::new("application/vnd.pmi.widget", "vnd.pmi.widget", Application, &["wg"]),
    KnownType::new("application/vnd.poc.group-advertisement+xml", "vnd.poc.group-advertisement+xml", Application, &[]),
    KnownType::new("application/vnd.pocketlearn", "vnd.pocketlearn", Application, &["plf"]),
    KnownType::new("application/vnd.powerbuilder6", "vnd.powerbuilder6", Application, &["pbd"]),
    KnownType::new("application/vnd.powerbuilder6-s", "vnd.powerbuilder6-s", Application, &[]),
    KnownType::new("application/vnd.powerbuilder7", "vnd.powerbuilder7", Application, &[]),
    KnownType::new("application/vnd.powerbuilder7-s", "vnd.powerbuilder7-s", Application, &[]),
    KnownType::new("application/vnd.powerbuilder75", "vnd.powerbuilder75", Application, &[]),
    KnownType::new("application/vnd.powerbuilder75-s", "vnd.powerbuilder75-s", Application, &[]),
    KnownType::new("application/vnd.preminet", "vnd.preminet", Application, &["preminet"]),
    KnownType::new("application/vnd.previewsystems.box", "vnd.previewsystems.box", Application, &["box", "vbox"]),
    KnownType::new("application/vnd.proteus.magazine", "vnd.proteus.magazine", Application, &["mgz"]),
    KnownType::new("application/vnd.psfs", "vnd.psfs", Application, &["psfs"]),
    KnownType::new("application/vnd.publishare-delta-tree", "vnd.publishare-delta-tree", Application, &["qps"]),
    KnownType::new("application/vnd.pvi.ptid1", "vnd.pvi.ptid1", Application, &["ptid"]),
    KnownType::new("application/vnd.pwg-multiplexed", "vnd.pwg-multiplexed", Application, &[]),
    KnownType::new("application/vnd.pwg-xhtml-print+xml", "vnd.pwg-xhtml-print+xml", Application, &[]),
    KnownType::new("application/vnd.qualcomm.brew-app-res", "vnd.qualcomm.brew-app-res", Application, &["bar"]),
    KnownType::new("application/vnd.quarantainenet", "vnd.quarantainenet", Application, &[]),
    KnownType::new("application/vnd.quark.quarkxpress", "vnd.Quark.QuarkXPress", Application, &["qxd", "qxt", "qwd", "qwt", "qxl", "qxb"]),
    KnownType::new("application/vnd.quobject-quoxdocument", "vnd.quobject-quoxdocument", Application, &["quox", "quiz"]),
    KnownType::new("application/vnd.radisys.moml+xml", "vnd.radisys.moml+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml+xml", "vnd.radisys.msml+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-audit+xml", "vnd.radisys.msml-audit+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-audit-conf+xml", "vnd.radisys.msml-audit-conf+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-audit-conn+xml", "vnd.radisys.msml-audit-conn+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-audit-dialog+xml", "vnd.radisys.msml-audit-dialog+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-audit-stream+xml", "vnd.radisys.msml-audit-stream+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-conf+xml", "vnd.radisys.msml-conf+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-dialog+xml", "vnd.radisys.msml-dialog+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-dialog-base+xml", "vnd.radisys.msml-dialog-base+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-dialog-fax-detect+xml", "vnd.radisys.msml-dialog-fax-detect+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-dialog-fax-sendrecv+xml", "vnd.radisys.msml-dialog-fax-sendrecv+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-dialog-group+xml", "vnd.radisys.msml-dialog-group+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-dialog-speech+xml", "vnd.radisys.msml-dialog-speech+xml", Application, &[]),
    KnownType::new("application/vnd.radisys.msml-dialog-transform+xml", "vnd.radisys.msml-dialog-transform+xml", Application, &[]),
    KnownType::new("application/vnd.rainstor.data", "vnd.rainstor.data", Application, &["tree"]),
    KnownType::new("application/vnd.rapid", "vnd.rapid", Application, &[]),
    KnownType::new("application/vnd.rar", "vnd.rar", Application, &["rar"]),
    KnownType::new("application/vnd.realvnc.bed", "vnd.realvnc.bed", Application, &["bed"]),
    KnownType::new("application/vnd.recordare.musicxml", "vnd.recordare.musicxml", Application, &["mxl"]),
    KnownType::new("application/vnd.recordare.musicxml+xml", "vnd.recordare.musicxml+xml", Application, &[]),
    KnownType::new("application/vnd.renlearn.rlprint", "vnd.RenLearn.rlprint", Application, &[]),
    KnownType::new("application/vnd.resilient.logic", "vnd.resilient.logic", Application, &["rlm", "reload"]),
    KnownType::new("application/vnd.restful+json", "vnd.restful+json", Application, &[]),
    KnownType::new("application/vnd.rig.cryptonote", "vnd.rig.cryptonote", Application, &["cryptonote"]),
    KnownType::new("application/vnd.rim.cod", "vnd.rim.cod", Application, &["cod"]),
    KnownType::new("application/vnd.route66.link66+xml", "vnd.route66.link66+xml", Application, &["link66"]),
    KnownType::new("application/vnd.rs-274x", "vnd.rs-274x", Application, &[]),
    KnownType::new("application/vnd.ruckus.download", "vnd.ruckus.download", Application, &[]),
    KnownType::new("application/vnd.s3sms", "vnd.s3sms", Application, &[]),
    KnownType::new("application/vnd.sailingtracker.track", "vnd.sailingtracker.track", Application, &["st"]),
    KnownType::new("application/vnd.sar", "vnd.sar", Application, &["sar"]),
    KnownType::new("application/vnd.sbm.cid", "vnd.sbm.cid", Application, &[]),
    KnownType::new("application/vnd.sbm.mid2", "vnd.sbm.mid2", Application, &[]),
    KnownType::new("application/vnd.scribus", "vnd.scribus", Application, &["scd", "sla", "slaz"]),
    KnownType::new("application/vnd.sealed.3df", "vnd.sealed.3df", Application, &["s3df"]),
    KnownType::new("application/vnd.sealed.csf", "vnd.sealed.csf", Application, &["scsf"]),
    KnownType::new("application/vnd.sealed.doc", "vnd.sealed.doc", Application, &["sdoc", "sdo", "s1w"]),
    KnownType::new("application/vnd.sealed.eml", "vnd.sealed.eml", Application, &["seml", "sem"]),
    KnownType::new("application/vnd.sealed.mht", "vnd.sealed.mht", Application, &["smht", "smh"]),
    KnownType::new("application/vnd.sealed.net", "vnd.sealed.net", Application, &[]),
    KnownType::new("application/vnd.sealed.ppt", "vnd.sealed.ppt", Application, &["sppt", "s1p"]),
    KnownType::new("application/vnd.sealed.tiff", "vnd.sealed.tiff", Application, &["stif"]),
    KnownType::new("application/vnd.sealed.xls", "vnd.sealed.xls", Application, &["sxls", "sxl", "s1e"]),
    KnownType::new("application/vnd.sealedmedia.softseal.html", "vnd.sealedmedia.softseal.html", Application, &["stml", "s1h"]),
    KnownType::new("application/vnd.sealedmedia.softseal.pdf", "vnd.sealedmedia.softseal.pdf", Application, &["spdf", "spd", "s1a"]),
    KnownType::new("application/vnd.seemail", "vnd.seemail", Application, &["see"]),
    KnownType::new("application/vnd.seis+json", "vnd.seis+json", Application, &[]),
    KnownType::new("application/vnd.sema", "vnd.sema", Application, &["sema"]),
    KnownType::new("application/vnd.semd", "vnd.semd", Application, &["semd"]),
    KnownType::new("application/vnd.semf", "vnd.semf", Application, &["semf"]),
    KnownType::new("application/vnd.shade-save-file", "vnd.shade-save-file", Application, &["ssv"]),
    KnownType::new("application/vnd.shana.informed.formdata", "vnd.shana.informed.formdata", Application, &["ifm"]),
    KnownType::new("application/vnd.shana.informed.formtemplate", "vnd.shana.informed.formtemplate", Application, &["itp"]),
    KnownType::new("application/vnd.shana.informed.interchange", "vnd.shana.informed.interchange", Application, &["iif"]),
    KnownType::new("application/vnd.shana.informed.package", "vnd.shana.informed.package", Application, &["ipk"]),
    KnownType::new("application/vnd.shootproof+json", "vnd.shootproof+json", Application, &[]),
    KnownType::new("application/vnd.shopkick+json", "vnd.shopkick+json", Application, &[]),
    KnownType::new("application/vnd.shp", "vnd.shp", Application, &["shp"]),
    KnownType::new("application/vnd.shx", "vnd.shx", Application, &["shx"]),
    KnownType::new("application/vnd.sigrok.session", "vnd.sigrok.session", Application, &["sr"]),
    KnownType::new("application/vnd.simtech-mindmapper", "vnd.SimTech-MindMapper", Application, &["twd", "twds"]),
    KnownType::new("application/vnd.siren+json", "vnd.siren+json", Application, &[]),
    KnownType::new("application/vnd.smaf", "vnd.smaf", Application, &["mmf"]),
    KnownType::new("application/vnd.smart.notebook", "vnd.smart.notebook", Application, &["notebook"]),
    KnownType::new("application/vnd.smart.teacher", "vnd.smart.teacher", Application, &["teacher"]),
    KnownType::new("application/vnd.snesdev-page-table", "vnd.snesdev-page-table", Application, &["ptrom", "pt"]),
    KnownType::new("application/vnd.software602.filler.form+xml", "vnd.software602.filler.form+xml", Application, &["fo"]),
    KnownType::new("application/vnd.software602.filler.form-xml-zip", "vnd.software602.filler.form-xml-zip", Application, &["zfo"]),
    KnownType::new("application/vnd.solent.sdkm+xml", "vnd.solent.sdkm+xml", Application, &["sdkm", "sdkd"]),
    KnownType::new("application/vnd.spotfire.dxp", "vnd.spotfire.dxp", Application, &["dxp"]),
    KnownType::new("application/vnd.spotfire.sfs", "vnd.spotfire.sfs", Application, &["sfs"]),
    KnownType::new("application/vnd.sqlite3", "vnd.sqlite3", Application, &["sqlite", "sqlite3"]),
    KnownType::new("application/vnd.sss-cod", "vnd.sss-cod", Application, &[]),
    KnownType::new("application/vnd.sss-dtf", "vnd.sss-dtf", Application, &[]),
    KnownType::new("application/vnd.sss-ntf", "vnd.sss-ntf", Application, &[]),
    KnownType::new("application/vnd.stardivision.calc", "vnd.stardivision.calc", Application, &["sdc"]),
    KnownType::new("application/vnd.stardivision.chart", "vnd.stardivision.chart", Application, &["sds"]),
    KnownType::new("application/vnd.stardivision.draw", "vnd.stardivision.draw", Application, &["sda"]),
    KnownType::new("application/vnd.stardivision.impress", "vnd.stardivision.impress", Application, &["sdd"]),
    KnownType::new("application/vnd.stardivision.math", "vnd.stardivision.math", Application, &["smf"]),
    KnownType::new("application/vnd.stardivision.writer", "vnd.stardivision.writer", Application, &["sdw"]),
    KnownType::new("application/vnd.stardivision.writer-global", "vnd.stardivision.writer-global", Application, &["sgl"]),
    KnownType::new("application/vnd.stepmania.package", "vnd.stepmania.package", Application, &["smzip"]),
    KnownType::new("application/vnd.stepmania.stepchart", "vnd.stepmania.stepchart", Application, &["sm"]),
    KnownType::new("application/vnd.street-stream", "vnd.street-stream", Application, &[]),
    KnownType::new("application/vnd.sun.wadl+xml", "vnd.sun.wadl+xml", Application, &["wadl"]),
    KnownType::new("application/vnd.sun.xml.calc", "vnd.sun.xml.calc", Application, &["sxc"]),
    KnownType::new("application/vnd.sun.xml.calc.template", "vnd.sun.xml.calc.template", Application, &["stc"]),
    KnownType::new("application/vnd.sun.xml.draw", "vnd.sun.xml.draw", Application, &["sxd"]),
    KnownType::new("application/vnd.sun.xml.draw.template", "vnd.sun.xml.draw.template", Application, &["std"]),
    KnownType::new("application/vnd.sun.xml.impress", "vnd.sun.xml.impress", Application, &["sxi"]),
    KnownType::new("application/vnd.sun.xml.impress.template", "vnd.sun.xml.impress.template", Application, &["sti"]),
    KnownType::new("application/vnd.sun.xml.math", "vnd.sun.xml.math", Application, &["sxm"]),
    KnownType::new("application/vnd.sun.xml.writer", "vnd.sun.xml.writer", Application, &["sxw"]),
    KnownType::new("application/vnd.sun.xml.writer.global", "vnd.sun.xml.writer.global", Application, &["sxg"]),
    KnownType::new("application/vnd.sun.xml.writer.template", "vnd.sun.xml.writer.template", Application, &["stw"]),
    KnownType::new("application/vnd.sus-calendar", "vnd.sus-calendar", Application, &["sus", "susp"]),
    KnownType::new("application/vnd.svd", "vnd.svd", Application, &[]),
    KnownType::new("application/vnd.swiftview-ics", "vnd.swiftview-ics", Application, &[]),
    KnownType::new("application/vnd.sybyl.mol2", "vnd.sybyl.mol2", Application, &["ml2", "mol2", "sy2"]),
    KnownType::new("application/vnd.sycle+xml", "vnd.sycle+xml", Application, &["scl"]),
    KnownType::new("application/vnd.syft+json", "vnd.syft+json", Application, &["syft.json"]),
    KnownType::new("application/vnd.symbian.install", "vnd.symbian.install", Application, &["sis"]),
    KnownType::new("application/vnd.syncml+xml", "vnd.syncml+xml", Application, &["xsm"]),
    KnownType::new("application/vnd.syncml.dm+wbxml", "vnd.syncml.dm+wbxml", Application, &["bdm"]),
    KnownType::new("application/vnd.syncml.dm+xml", "vnd.syncml.dm+xml", Application, &["xdm"]),
    KnownType::new("application/vnd.syncml.dm.notification", "vnd.syncml.dm.notification", Application, &[]),
    KnownType::new("application/vnd.syncml.dmddf+wbxml", "vnd.syncml.dmddf+wbxml", Application, &[]),
    KnownType::new("application/vnd.syncml.dmddf+xml", "vnd.syncml.dmddf+xml", Application, &["ddf"]),
    KnownType::new("application/vnd.syncml.dmtnds+wbxml", "vnd.syncml.dmtnds+wbxml", Application, &[]),
    KnownType::new("application/vnd.syncml.dmtnds+xml", "vnd.syncml.dmtnds+xml", Application, &[]),
    KnownType::new("application/vnd.syncml.ds.notification", "vnd.syncml.ds.notification", Application, &[]),
    KnownType::new("application/vnd.tableschema+json", "vnd.tableschema+json", Application, &[]),
    KnownType::new("application/vnd.tao.intent-module-archive", "vnd.tao.intent-module-archive", Application, &["tao"]),
    KnownType::new("application/vnd.tcpdump.pcap", "vnd.tcpdump.pcap", Application, &["pcap", "cap", "dmp"]),
    KnownType::new("application/vnd.theqvd", "vnd.theqvd", Application, &["qvd"]),
    KnownType::new("application/vnd.think-cell.ppttc+json", "vnd.think-cell.ppttc+json", Application, &["ppttc"]),
    KnownType::new("application/vnd.tmd.mediaflex.api+xml", "vnd.tmd.mediaflex.api+xml", Application, &[]),
    KnownType::new("application/vnd.tml", "vnd.tml", Application, &["vfr", "viaframe"]),
    KnownType::new("application/vnd.tmobile-livetv", "vnd.tmobile-livetv", Application, &["tmo"]),
    KnownType::new("application/vnd.tri.onesource", "vnd.tri.onesource", Application, &[]),
    KnownType::new("application/vnd.trid.tpt", "vnd.trid.tpt", Application, &["tpt"]),
    KnownType::new("application/vnd.triscape.mxs", "vnd.triscape.mxs", Application, &["mxs"]),
    KnownType::new("application/vnd.trueapp", "vnd.trueapp", Application, &["tra"]),
    KnownType::new("application/vnd.truedoc", "vnd.truedoc", Application, &[]),
    KnownType::new("application/vnd.ubisoft.webplayer", "vnd.ubisoft.webplayer", Application, &[]),
    KnownType::new("application/vnd.ufdl", "vnd.ufdl", Application, &["ufdl", "ufd", "frm"]),
    KnownType::new("application/vnd.uiq.theme", "vnd.uiq.theme", Application, &["utz"]),
    KnownType::new("application/vnd.umajin", "vnd.umajin", Application, &["umj"]),
    KnownType::new("application/vnd.unity", "vnd.unity", Application, &["unityweb"]),
    KnownType::new("application/vnd.uoml+xml", "vnd.uoml+xml", Application, &["uoml", "uo"]),
    KnownType::new("application/vnd.uplanet.alert", "vnd.uplanet.alert", Application, &[]),
    KnownType::new("application/vnd.uplanet.alert-wbxml", "vnd.uplanet.alert-wbxml", Application, &[]),
    KnownType::new("application/vnd.uplanet.bearer-choice", "vnd.uplanet.bearer-choice", Application, &[]),
    KnownType::new("application/vnd.uplanet.bearer-choice-wbxml", "vnd.uplanet.bearer-choice-wbxml", Application, &[]),
    KnownType::new("application/vnd.uplanet.cacheop", "vnd.uplanet.cacheop", Application, &[]),
    KnownType::new("application/vnd.uplanet.cacheop-wbxml", "vnd.uplanet.cacheop-wbxml", Application, &[]),
    KnownType::new("application/vnd.uplanet.channel", "vnd.uplanet.channel", Application, &[]),
    KnownType::new("application/vnd.uplanet.channel-wbxml", "vnd.uplanet.channel-wbxml", Application, &[]),
    KnownType::new("application/vnd.uplanet.list", "vnd.uplanet.list", Application, &[]),
    KnownType::new("application/vnd.uplanet.list-wbxml", "vnd.uplanet.list-wbxml", Application, &[]),
    KnownType::new("application/vnd.uplanet.listcmd", "vnd.uplanet.listcmd", Application, &[]),
    KnownType::new("application/vnd.uplanet.listcmd-wbxml", "vnd.uplanet.listcmd-wbxml", Application, &[]),
    KnownType::new("application/vnd.uplanet.signal", "vnd.uplanet.signal", Application, &[]),
    KnownType::new("application/vnd.uri-map", "vnd.uri-map", Application, &["urim", "urimap"]),
    KnownType::new("application/vnd.valve.source.material", "vnd.valve.source.material", Application, &["vmt"]),
    KnownType::new("application/vnd.vcx", "vnd.vcx", Application, &["vcx"]),
    KnownType::new("application/vnd.vd-study", "vnd.vd-study", Application, &["mxi", "study-inter", "model-inter"]),
    KnownType::new("application/vnd.vectorworks", "vnd.vectorworks", Application, &["vwx"]),
    KnownType::new("application/vnd.vel+json", "vnd.vel+json", Application, &[]),
    KnownType::new("application/vnd.verimatrix.vcas", "vnd.verimatrix.vcas", Application, &[]),
    KnownType::new("application/vnd.veritone.aion+json", "vnd.veritone.aion+json", Application, &["aion", "vtnstd"]),
    KnownType::new("application/vnd.veryant.thin", "vnd.veryant.thin", Application, &["istc", "isws"]),
    KnownType::new("application/vnd.ves.encrypted", "vnd.ves.encrypted", Application, &["ves"]),
    KnownType::new("application/vnd.vidsoft.vidconference", "vnd.vidsoft.vidconference", Application, &["vsc"]),
    KnownType::new("application/vnd.visio", "vnd.visio", Application, &["vsd", "vst", "vsw", "vss"]),
    KnownType::new("application/vnd.visionary", "vnd.visionary", Application, &["vis"]),
    KnownType::new("application/vnd.vividence.scriptfile", "vnd.vividence.scriptfile", Application, &[]),
    KnownType::new("application/vnd.vsf", "vnd.vsf", Application, &["vsf"]),
    KnownType::new("application/vnd.wap.sic", "vnd.wap.sic", Application, &["sic"]),
    KnownType::new("application/vnd.wap.slc", "vnd.wap.slc", Application, &["slc"]),
    KnownType::new("application/vnd.wap.wbxml", "vnd.wap.wbxml", Application, &["wbxml"]),
    KnownType::new("application/vnd.wap.wmlc", "vnd.wap.wmlc", Application, &["wmlc"]),
    KnownType::new("application/vnd.wap.wmlscriptc", "vnd.wap.wmlscriptc", Application, &["wmlsc"]),
    KnownType::new("application/vnd.wasmflow.wafl", "vnd.wasmflow.wafl", Application, &["wafl"]),
    KnownType::new("application/vnd.webturbo", "vnd.webturbo", Application, &["wtb"]),
    KnownType::new("application/vnd.wfa.dpp", "vnd.wfa.dpp", Application, &[]),
    KnownType::new("application/vnd.wfa.p2p", "vnd.wfa.p2p", Application, &["p2p"]),
    KnownType::new("application/vnd.wfa.wsc", "vnd.wfa.wsc", Application, &["wsc"]),
    KnownType::new("application/vnd.windows.devicepairing", "vnd.windows.devicepairing", Application, &[]),
    KnownType::new("application/vnd.wmc", "vnd.wmc", Application, &["wmc"]),
    KnownType::new("application/vnd.wmf.bootstrap", "vnd.wmf.bootstrap", Application, &[]),
    KnownType::new("application/vnd.wolfram.mathematica", "vnd.wolfram.mathematica", Application, &["nb"]),
    KnownType::new("application/vnd.wolfram.mathematica.package", "vnd.wolfram.mathematica.package", Application, &["m"]),
    KnownType::new("application/vnd.wolfram.player", "vnd.wolfram.player", Application, &["nbp"]),
    KnownType::new("application/vnd.wordlift", "vnd.wordlift", Application, &[]),
    KnownType::new("application/vnd.wordperfect", "vnd.wordperfect", Application, &["wpd"]),
    KnownType::new("application/vnd.wqd", "vnd.wqd", Application, &["wqd"]),
    KnownType::new("application/vnd.wrq-hp3000-labelled", "vnd.wrq-hp3000-labelled", Application, &[]),
    KnownType::new("application/vnd.wt.stf", "vnd.wt.stf", Application, &["stf"]),
    KnownType::new("application/vnd.wv.csp+wbxml", "vnd.wv.csp+wbxml", Application, &["wv"]),
    KnownType::new("application/vnd.wv.csp+xml", "vnd.wv.csp+xml", Application, &[]),
    KnownType::new("application/vnd.wv.ssp+xml", "vnd.wv.ssp+xml", Application, &[]),
    KnownType::new("application/vnd.xacml+json", "vnd.xacml+json", Application, &[]),
    KnownType::new("application/vnd.xara", "vnd.xara", Application, &["xar"]),
    KnownType::new("application/vnd.xfdl", "vnd.xfdl", Application, &["xfdl", "xfd"]),
    KnownType::new("application/vnd.xfdl.webform", "vnd.xfdl.webform", Application, &[]),
    KnownType::new("application/vnd.xmi+xml", "vnd.xmi+xml", Application, &[]),
    KnownType::new("application/vnd.xmpie.cpkg", "vnd.xmpie.cpkg", Application, &["cpkg"]),
    KnownType::new("application/vnd.xmpie.dpkg", "vnd.xmpie.dpkg", Application, &["dpkg"]),
    KnownType::new("application/vnd.xmpie.plan", "vnd.xmpie.plan", Application, &[]),
    KnownType::new("application/vnd.xmpie.ppkg", "vnd.xmpie.ppkg", Application, &["ppkg"]),
    KnownType::new("application/vnd.xmpie.xlim", "vnd.xmpie.xlim", Application, &["xlim"]),
    KnownType::new("application/vnd.yamaha.hv-dic", "vnd.yamaha.hv-dic", Application, &["hvd"]),
    KnownType::new("application/vnd.yamaha.hv-script", "vnd.yamaha.hv-script", Application, &["hvs"]),
    KnownType::new("application/vnd.yamaha.hv-voice", "vnd.yamaha.hv-voice", Application, &["hvp"]),
    KnownType::new("application/vnd.yamaha.openscoreformat", "vnd.yamaha.openscoreformat", Application, &["osf"]),
    KnownType::new("application/vnd.yamaha.openscoreformat.osfpvg+xml", "vnd.yamaha.openscoreformat.osfpvg+xml", Application, &[]),
    KnownType::new("application/vnd.yamaha.remote-setup", "vnd.yamaha.remote-setup", Application, &[]),
    KnownType::new("application/vnd.yamaha.smaf-audio", "vnd.yamaha.smaf-audio", Application, &["saf"]),
    KnownType::new("application/vnd.yamaha.smaf-phrase", "vnd.yamaha.smaf-phrase", Application, &["spf"]),
    KnownType::new("application/vnd.yamaha.through-ngn", "vnd.yamaha.through-ngn", Application, &[]),
    KnownType::new("application/vnd.yamaha.tunnel-udpencap", "vnd.yamaha.tunnel-udpencap", Application, &[]),
    KnownType::new("application/vnd.yaoweme", "vnd.yaoweme", Application, &["yme"]),
    KnownType::new("application/vnd.yellowriver-custom-menu", "vnd.yellowriver-custom-menu", Application, &["cmp"]),
    KnownType::new("application/vnd.zul", "vnd.zul", Application, &["zir", "zirz"]),
    KnownType::new("application/vnd.zzazz.deck+xml", "vnd.zzazz.deck+xml", Application, &["zaz"]),
    KnownType::new("application/voicexml+xml", "voicexml+xml", Application, &["vxml"]),
    KnownType::new("application/voucher-cms+json", "voucher-cms+json", Application, &["vcj"]),
    KnownType::new("application/vq-rtcpxr", "vq-rtcpxr", Application, &[]),
    KnownType::new("application/wasm", "wasm", Application, &["wasm"]),
    KnownType::new("application/watcherinfo+xml", "watcherinfo+xml", Application, &["wif"]),
    KnownType::new("application/webpush-options+json", "webpush-options+json", Application, &[]),
    KnownType::new("application/whoispp-query", "whoispp-query", Application, &[]),
    KnownType::new("application/whoispp-response", "whoispp-response", Application, &[]),
    KnownType::new("application/widget", "widget", Application, &["wgt"]),
    KnownType::new("application/wita", "wita", Application, &[]),
    KnownType::new("application/wordperfect5.1", "wordperfect5.1", Application, &[]),
    KnownType::new("application/wsdl+xml", "wsdl+xml", Application, &["wsdl"]),
    KnownType::new("application/wspolicy+xml", "wspolicy+xml", Application, &["wspolicy"]),
    KnownType::new("application/x400-bp", "x400-bp", Application, &[]),
    KnownType::new("application/xacml+xml", "xacml+xml", Application, &[]),
    KnownType::new("application/xcap-att+xml", "xcap-att+xml", Application, &["xav"]),
    KnownType::new("application/xcap-caps+xml", "xcap-caps+xml", Application, &["xca"]),
    KnownType::new("application/xcap-diff+xml", "xcap-diff+xml", Application, &["xdf"]),
    KnownType::new("application/xcap-el+xml", "xcap-el+xml", Application, &["xel"]),
    KnownType::new("application/xcap-error+xml", "xcap-error+xml", Application, &["xer"]),
    KnownType::new("application/xcap-ns+xml", "xcap-ns+xml", Application, &["xns"]),
    KnownType::new("application/xcon-conference-info+xml", "xcon-conference-info+xml", Application, &[]),
    KnownType::new("application/xcon-conference-info-diff+xml", "xcon-conference-info-diff+xml", Application, &[]),
    KnownType::new("application/xenc+xml", "xenc+xml", Application, &[]),
    KnownType::new("application/xfdf", "xfdf", Application, &["xfdf"]),
    KnownType::new("application/xhtml+xml", "xhtml+xml", Application, &["xhtml", "xhtm", "xht"]),
    KnownType::new("application/xliff+xml", "xliff+xml", Application, &["xlf"]),
    KnownType::new("application/xml", "xml", Application, &["xml"]),
    KnownType::new("application/xml-dtd", "xml-dtd", Application, &["dtd", "mod"]),
    KnownType::new("application/xml-external-parsed-entity", "xml-external-parsed-entity", Application, &["ent"]),
    KnownType::new("application/xml-patch+xml", "xml-patch+xml", Application, &[]),
    KnownType::new("application/xmpp+xml", "xmpp+xml", Application, &[]),
    KnownType::new("application/xop+xml", "xop+xml", Application, &["xop"]),
    KnownType::new("application/xslt+xml", "xslt+xml", Application, &["xsl", "xslt"]),
    KnownType::new("application/xspf+xml", "xspf+xml", Application, &["xspf"]),
    KnownType::new("application/xv+xml", "xv+xml", Application, &["mxml", "xhvml", "xvml", "xvm"]),
    KnownType::new("application/yang", "yang", Application, &["yang"]),
    KnownType::new("application/yang-data+cbor", "yang-data+cbor", Application, &[]),
    KnownType::new("application/yang-data+json", "yang-data+json", Application, &[]),
    KnownType::new("application/yang-data+xml", "yang-data+xml", Application, &[]),
    KnownType::new("application/yang-patch+json", "yang-patch+json", Application, &[]),
    KnownType::new("application/yang-patch+xml", "yang-patch+xml", Application, &[]),
    KnownType::new("application/yin+xml", "yin+xml", Application, &["yin"]),
    KnownType::new("application/zip", "zip", Application, &["zip"]),
    KnownType::new("application/zlib", "zlib", Application, &[]),
    KnownType::new("application/zstd", "zstd", Application, &["zst"]),
    KnownType::new("audio/1d-interleaved-parityfec", "1d-interleaved-parityfec", Audio, &[]),
    KnownType::new("audio/32kadpcm", "32kadpcm", Audio, &["726"]),
    KnownType::new("audio/3gpp", "3gpp", Audio, &[]),
    KnownType::new("audio/3gpp2", "3gpp2", Audio, &[]),
    KnownType::new("audio/aac", "aac", Audio, &["adts", "aac", "ass"]),
    KnownType::new("audio/ac3", "ac3", Audio, &["ac3"]),
    KnownType::new("audio/amr", "AMR", Audio, &["amr"]),
    KnownType::new("audio/amr-wb", "AMR-WB", Audio, &["awb"]),
    KnownType::new("audio/amr-wb+", "amr-wb+", Audio, &[]),
    KnownType::new("audio/annodex", "annodex", Audio, &["axa"]),
    KnownType::new("audio/aptx", "aptx", Audio, &[]),
    KnownType::new("audio/asc", "asc", Audio, &["acn"]),
    KnownType::new("audio/atrac-advanced-lossless", "ATRAC-ADVANCED-LOSSLESS", Audio, &["aal"]),
    KnownType::new("audio/atrac-x", "ATRAC-X", Audio, &["atx"]),
    KnownType::new("audio/atrac3", "ATRAC3", Audio, &["at3", "aa3", "omg"]),
    KnownType::new("audio/basic", "basic", Audio, &["au", "snd"]),
    KnownType::new("audio/bv16", "BV16", Audio, &[]),
    KnownType::new("audio/bv32", "BV32", Audio, &[]),
    KnownType::new("audio/clearmode", "clearmode", Audio, &[]),
    KnownType::new("audio/cn", "CN", Audio, &[]),
    KnownType::new("audio/csound", "csound", Audio, &["csd", "orc", "sco"]),
    KnownType::new("audio/dat12", "DAT12", Audio, &[]),
    KnownType::new("audio/dls", "dls", Audio, &["dls"]),
    KnownType::new("audio/dsr-es201108", "dsr-es201108", Audio, &[]),
    KnownType::new("audio/dsr-es202050", "dsr-es202050", Audio, &[]),
    KnownType::new("audio/dsr-es202211", "dsr-es202211", Audio, &[]),
    KnownType::new("audio/dsr-es202212", "dsr-es202212", Audio, &[]),
    KnownType::new("audio/dv", "DV", Audio, &[]),
    KnownType::new("audio/dvi4", "DVI4", Audio, &[]),
    KnownType::new("audio/eac3", "eac3", Audio, &[]),
    KnownType::new("audio/encaprtp", "encaprtp", Audio, &[]),
    KnownType::new("audio/evrc", "EVRC", Audio, &["evc"]),
    KnownType::new("audio/evrc-qcp", "EVRC-QCP", Audio, &["qcp"]),
    KnownType::new("audio/evrc0", "EVRC0", Audio, &[]),
    KnownType::new("audio/evrc1", "EVRC1", Audio, &[]),
    KnownType::new("audio/evrcb", "EVRCB", Audio, &["evb"]),
    KnownType::new("audio/evrcb0", "EVRCB0", Audio, &[]),
    KnownType::new("audio/evrcb1", "EVRCB1", Audio, &[]),
    KnownType::new("audio/evrcnw", "EVRCNW", Audio, &["enw"]),
    KnownType::new("audio/evrcnw0", "EVRCNW0", Audio, &[]),
    KnownType::new("audio/evrcnw1", "EVRCNW1", Audio, &[]),
    KnownType::new("audio/evrcwb", "EVRCWB", Audio, &["evw"]),
    KnownType::new("audio/evrcwb0", "EVRCWB0", Audio, &[]),
    KnownType::new("audio/evrcwb1", "EVRCWB1", Audio, &[]),
    KnownType::new("audio/evs", "EVS", Audio, &[]),
    KnownType::new("audio/example", "example", Audio, &[]),
    KnownType::new("audio/flac", "flac", Audio, &["flac"]),
    KnownType::new("audio/flexfec", "flexfec", Audio, &[]),
    KnownType::new("audio/fwdred", "fwdred", Audio, &[]),
    KnownType::new("audio/g711-0", "G711-0", Audio, &[]),
    KnownType::new("audio/g719", "G719", Audio, &[]),
    KnownType::new("audio/g722", "G722", Audio, &[]),
    KnownType::new("audio/g7221", "G7221", Audio, &[]),
    KnownType::new("audio/g723", "G723", Audio, &[]),
    KnownType::new("audio/g726-16", "G726-16", Audio, &[]),
    KnownType::new("audio/g726-24", "G726-24", Audio, &[]),
    KnownType::new("audio/g726-32", "G726-32", Audio, &[]),
    KnownType::new("audio/g726-40", "G726-40", Audio, &[]),
    KnownType::new("audio/g728", "G728", Audio, &[]),
    KnownType::new("audio/g729", "G729", Audio, &[]),
    KnownType::new("audio/g7291", "G7291", Audio, &[]),
    KnownType::new("audio/g729d", "G729D", Audio, &[]),
    KnownType::new("audio/g729e", "G729E", Audio, &[]),
    KnownType::new("audio/gsm", "GSM", Audio, &[]),
    KnownType::new("audio/gsm-efr", "GSM-EFR", Audio, &[]),
    KnownType::new("audio/gsm-hr-08", "GSM-HR-08", Audio, &[]),
    KnownType::new("audio/ilbc", "iLBC", Audio, &["lbc"]),
    KnownType::new("audio/ip-mr_v2.5", "ip-mr_v2.5", Audio, &[]),
    KnownType::new("audio/l16", "L16", Audio, &["l16"]),
    KnownType::new("audio/l20", "L20", Audio, &[]),
    KnownType::new("audio/l24", "L24", Audio, &[]),
    KnownType::new("audio/l8", "L8", Audio, &[]),
    KnownType::new("audio/lpc", "LPC", Audio, &[]),
    KnownType::new("audio/melp", "MELP", Audio, &[]),
    KnownType::new("audio/melp1200", "MELP1200", Audio, &[]),
    KnownType::new("audio/melp2400", "MELP2400", Audio, &[]),
    KnownType::new("audio/melp600", "MELP600", Audio, &[]),
    KnownType::new("audio/mhas", "mhas", Audio, &["mhas"]),
    KnownType::new("audio/mobile-xmf", "mobile-xmf", Audio, &["mxmf"]),
    KnownType::new("audio/mp4", "mp4", Audio, &["m4a"]),
    KnownType::new("audio/mp4a-latm", "MP4A-LATM", Audio, &[]),
    KnownType::new("audio/mpa", "MPA", Audio, &[]),
    KnownType::new("audio/mpa-robust", "mpa-robust", Audio, &[]),
    KnownType::new("audio/mpeg", "mpeg", Audio, &["mpga", "mpega", "mp1", "mp2", "mp3"]),
    KnownType::new("audio/mpeg4-generic", "mpeg4-generic", Audio, &[]),
    KnownType::new("audio/mpegurl", "mpegurl", Audio, &["m3u"]),
    KnownType::new("audio/ogg", "ogg", Audio, &["oga", "ogg", "opus", "spx"]),
    KnownType::new("audio/opus", "opus", Audio, &[]),
    KnownType::new("audio/parityfec", "parityfec", Audio, &[]),
    KnownType::new("audio/pcma", "PCMA", Audio, &[]),
    KnownType::new("audio/pcma-wb", "PCMA-WB", Audio, &[]),
    KnownType::new("audio/pcmu", "PCMU", Audio, &[]),
    KnownType::new("audio/pcmu-wb", "PCMU-WB", Audio, &[]),
    KnownType::new("audio/prs.sid", "prs.sid", Audio, &["sid", "psid"]),
    KnownType::new("audio/qcelp", "QCELP", Audio, &[]),
    KnownType::new("audio/raptorfec", "raptorfec", Audio, &[]),
    KnownType::new("audio/red", "RED", Audio, &[]),
    KnownType::new("audio/rtp-enc-aescm128", "rtp-enc-aescm128", Audio, &[]),
    KnownType::new("audio/rtp-midi", "rtp-midi", Audio, &[]),
    KnownType::new("audio/rtploopback", "rtploopback", Audio, &[]),
    KnownType::new("audio/rtx", "rtx", Audio, &[]),
    KnownType::new("audio/scip", "scip", Audio, &[]),
    KnownType::new("audio/smv", "SMV", Audio, &["smv"]),
    KnownType::new("audio/smv-qcp", "SMV-QCP", Audio, &[]),
    KnownType::new("audio/smv0", "SMV0", Audio, &[]),
    KnownType::new("audio/sofa", "sofa", Audio, &["sofa"]),
    KnownType::new("audio/sp-midi", "sp-midi", Audio, &["mid"]),
    KnownType::new("audio/speex", "speex", Audio, &[]),
    KnownType::new("audio/t140c", "t140c", Audio, &[]),
    KnownType::new("audio/t38", "t38", Audio, &[]),
    KnownType::new("audio/telephone-event", "telephone-event", Audio, &[]),
    KnownType::new("audio/tetra_acelp", "TETRA_ACELP", Audio, &[]),
    KnownType::new("audio/tetra_acelp_bb", "TETRA_ACELP_BB", Audio, &[]),
    KnownType::new("audio/tone", "tone", Audio, &[]),
    KnownType::new("audio/tsvcis", "TSVCIS", Audio, &[]),
    KnownType::new("audio/uemclip", "UEMCLIP", Audio, &[]),
    KnownType::new("audio/ulpfec", "ulpfec", Audio, &[]),
    KnownType::new("audio/usac", "usac", Audio, &["loas", "xhe"]),
    KnownType::new("audio/vdvi", "VDVI", Audio, &[]),
    KnownType::new("audio/vmr-wb", "VMR-WB", Audio, &[]),
    KnownType::new("audio/vnd.3gpp.iufp", "vnd.3gpp.iufp", Audio, &[]),
    KnownType::new("audio/vnd.4sb", "vnd.4SB", Audio, &[]),
    KnownType::new("audio/vnd.audiokoz", "vnd.audiokoz", Audio, &["koz"]),
    KnownType::new("audio/vnd.celp", "vnd.CELP", Audio, &[]),
    KnownType::new("audio/vnd.cisco.nse", "vnd.cisco.nse", Audio, &[]),
    KnownType::new("audio/vnd.cmles.radio-events", "vnd.cmles.radio-events", Audio, &[]),
    KnownType::new("audio/vnd.cns.anp1", "vnd.cns.anp1", Audio, &[]),
    KnownType::new("audio/vnd.cns.inf1", "vnd.cns.inf1", Audio, &[]),
    KnownType::new("audio/vnd.dece.audio", "vnd.dece.audio", Audio, &["uva", "uvva"]),
    KnownType::new("audio/vnd.digital-winds", "vnd.digital-winds", Audio, &["eol"]),
    KnownType::new("audio/vnd.dlna.adts", "vnd.dlna.adts", Audio, &[]),
    KnownType::new("audio/vnd.dolby.heaac.1", "vnd.dolby.heaac.1", Audio, &[]),
    KnownType::new("audio/vnd.dolby.heaac.2", "vnd.dolby.heaac.2", Audio, &[]),
    KnownType::new("audio/vnd.dolby.mlp", "vnd.dolby.mlp", Audio, &["mlp"]),
    KnownType::new("audio/vnd.dolby.mps", "vnd.dolby.mps", Audio, &[]),
    KnownType::new("audio/vnd.dolby.pl2", "vnd.dolby.pl2", Audio, &[]),
    KnownType::new("audio/vnd.dolby.pl2x", "vnd.dolby.pl2x", Audio, &[]),
    KnownType::new("audio/vnd.dolby.pl2z", "vnd.dolby.pl2z", Audio, &[]),
    KnownType::new("audio/vnd.dolby.pulse.1", "vnd.dolby.pulse.1", Audio, &[]),
    KnownType::new("audio/vnd.dra", "vnd.dra", Audio, &[]),
    KnownType::new("audio/vnd.dts", "vnd.dts", Audio, &["dts"]),
    KnownType::new("audio/vnd.dts.hd", "vnd.dts.hd", Audio, &["dtshd"]),
    KnownType::new("audio/vnd.dts.uhd", "vnd.dts.uhd", Audio, &[]),
    KnownType::new("audio/vnd.dvb.file", "vnd.dvb.file", Audio, &[]),
    KnownType::new("audio/vnd.everad.plj", "vnd.everad.plj", Audio, &["plj"]),
    KnownType::new("audio/vnd.hns.audio", "vnd.hns.audio", Audio, &[]),
    KnownType::new("audio/vnd.lucent.voice", "vnd.lucent.voice", Audio, &["lvp"]),
    KnownType::new("audio/vnd.ms-playready.media.pya", "vnd.ms-playready.media.pya", Audio, &["pya"]),
    KnownType::new("audio/vnd.nokia.mobile-xmf", "vnd.nokia.mobile-xmf", Audio, &[]),
    KnownType::new("audio/vnd.nortel.vbk", "vnd.nortel.vbk", Audio, &["vbk"]),
    KnownType::new("audio/vnd.nuera.ecelp4800", "vnd.nuera.ecelp4800", Audio, &["ecelp4800"]),
    KnownType::new("audio/vnd.nuera.ecelp7470", "vnd.nuera.ecelp7470", Audio, &["ecelp7470"]),
    KnownType::new("audio/vnd.nuera.ecelp9600", "vnd.nuera.ecelp9600", Audio, &["ecelp9600"]),
    KnownType::new("audio/vnd.octel.sbc", "vnd.octel.sbc", Audio, &[]),
    KnownType::new("audio/vnd.presonus.multitrack", "vnd.presonus.multitrack", Audio, &["multitrack"]),
    KnownType::new("audio/vnd.rhetorex.32kadpcm", "vnd.rhetorex.32kadpcm", Audio, &[]),
    KnownType::new("audio/vnd.rip", "vnd.rip", Audio, &["rip"]),
    KnownType::new("audio/vnd.sealedmedia.softseal.mpeg", "vnd.sealedmedia.softseal.mpeg", Audio, &["smp3", "smp", "s1m"]),
    KnownType::new("audio/vnd.vmx.cvsd", "vnd.vmx.cvsd", Audio, &[]),
    KnownType::new("audio/vorbis", "vorbis", Audio, &[]),
    KnownType::new("audio/vorbis-config", "vorbis-config", Audio, &[]),
    KnownType::new("font/collection", "collection", Font, &["ttc"]),
    KnownType::new("font/otf", "otf", Font, &["otf"]),
    KnownType::new("font/sfnt", "sfnt", Font, &[]),
    KnownType::new("font/ttf", "ttf", Font, &["ttf"]),
    KnownType::new("font/woff", "woff", Font, &["woff"]),
    KnownType::new("font/woff2", "woff2", Font, &["woff2"]),
    KnownType::new("image/aces", "aces", Image, &["exr"]),
    KnownType::new("image/apng", "apng", Image, &["apng"]),
    KnownType::new("image/avci", "avci", Image, &["avci"]),
    KnownType::new("image/avcs", "avcs", Image, &["avcs"]),
    KnownType::new("image/avif", "avif", Image, &["avif", "hif"]),
    KnownType::new("image/bmp", "bmp", Image, &["bmp"]),
    KnownType::new("image/cgm", "cgm", Image, &["cgm"]),
    KnownType::new("image/dicom-rle", "dicom-rle", Image, &["drle"]),
    KnownType::new("image/dpx", "dpx", Image, &["dpx"]),
    KnownType::new("image/emf", "emf", Image, &["emf"]),
    KnownType::new("image/example", "example", Image, &[]),
    KnownType::new("image/fits", "fits", Image, &["fits", "fit", "fts"]),
    KnownType::new("image/g3fax", "g3fax", Image, &[]),
    KnownType::new("image/gif", "gif", Image, &["gif"]),
    KnownType::new("image/heic", "heic", Image, &["heic"]),
    KnownType::new("image/heic-sequence", "heic-sequence", Image, &["heics"]),
    KnownType::new("image/heif", "heif", Image, &["heif"]),
    KnownType::new("image/heif-sequence", "heif-sequence", Image, &["heifs"]),
    KnownType::new("image/hej2k", "hej2k", Image, &["hej2"]),
    KnownType::new("image/hsj2", "hsj2", Image, &["hsj2"]),
    KnownType::new("image/ief", "ief", Image, &["ief"]),
    KnownType::new("image/jls", "jls", Image, &["jls"]),
    KnownType::new("image/jp2", "jp2", Image, &["jp2", "jpg2"]),
    KnownType::new("image/jpeg", "jpeg", Image, &["jpeg", "jpg", "jpe", "jfif"]),
    KnownType::new("image/jph", "jph", Image, &["jph"]),
    KnownType::new("image/jphc", "jphc", Image, &["jhc", "jphc"]),
    KnownType::new("image/jpm", "jpm", Image, &["jpm", "jpgm"]),
    KnownType::new("image/jpx", "jpx", Image, &["jpx", "jpf"]),
    KnownType::new("image/jxl", "jxl", Image, &["jxl"]),
    KnownType::new("image/jxr", "jxr", Image, &["jxr"]),
    KnownType::new("image/jxra", "jxrA", Image, &["jxra"]),
    KnownType::new("image/jxrs", "jxrS", Image, &["jxrs"]),
    KnownType::new("image/jxs", "jxs", Image, &["jxs"]),
    KnownType::new("image/jxsc", "jxsc", Image, &["jxsc"]),
    KnownType::new("image/jxsi", "jxsi", Image, &["jxsi"]),
    KnownType::new("image/jxss", "jxss", Image, &["jxss"]),
    KnownType::new("image/ktx", "ktx", Image, &["ktx"]),
    KnownType::new("image/ktx2", "ktx2", Image, &["ktx2"]),
    KnownType::new("image/naplps", "naplps", Image, &[]),
    KnownType::new("image/png", "png", Image, &["png"]),
    KnownType::new("image/prs.btif", "prs.btif", Image, &["btif", "btf"]),
    KnownType::new("image/prs.pti", "prs.pti", Image, &["pti"]),
    KnownType::new("image/pwg-raster", "pwg-raster", Image, &[]),
    KnownType::new("image/svg+xml", "svg+xml", Image, &["svg", "svgz"]),
    KnownType::new("image/t38", "t38", Image, &[]),
    KnownType::new("image/tiff", "tiff", Image, &["tiff", "tif"]),
    KnownType::new("image/tiff-fx", "tiff-fx", Image, &["tfx"]),
    KnownType::new("image/vnd.adobe.photoshop", "vnd.adobe.photoshop", Image, &["psd"]),
    KnownType::new("image/vnd.airzip.accelerator.azv", "vnd.airzip.accelerator.azv", Image, &["azv"]),
    KnownType::new("image/vnd.cns.inf2", "vnd.cns.inf2", Image, &[]),
    KnownType::new("image/vnd.dece.graphic", "vnd.dece.graphic", Image, &["uvi", "uvvi", "uvg", "uvvg"]),
    KnownType::new("image/vnd.djvu", "vnd.djvu", Image, &["djvu", "djv"]),
    KnownType::new("image/vnd.dvb.subtitle", "vnd.dvb.subtitle", Image, &[]),
    KnownType::new("image/vnd.dwg", "vnd.dwg", Image, &["dwg"]),
    KnownType::new("image/vnd.dxf", "vnd.dxf", Image, &["dxf"]),
    KnownType::new("image/vnd.fastbidsheet", "vnd.fastbidsheet", Image, &["fbs"]),
    KnownType::new("image/vnd.fpx", "vnd.fpx", Image, &["fpx"]),
    KnownType::new("image/vnd.fst", "vnd.fst", Image, &["fst"]),
    KnownType::new("image/vnd.fujixerox.edmics-mmr", "vnd.fujixerox.edmics-mmr", Image, &["mmr"]),
    KnownType::new("image/vnd.fujixerox.edmics-rlc", "vnd.fujixerox.edmics-rlc", Image, &["rlc"]),
    KnownType::new("image/vnd.globalgraphics.pgb", "vnd.globalgraphics.pgb", Image, &["pgb"]),
    KnownType::new("image/vnd.microsoft.icon", "vnd.microsoft.icon", Image, &["ico"]),
    KnownType::new("image/vnd.mix", "vnd.mix", Image, &[]),
    KnownType::new("image/vnd.ms-modi", "vnd.ms-modi", Image, &["mdi"]),
    KnownType::new("image/vnd.net-fpx", "vnd.net-fpx", Image, &[]),
    KnownType::new("image/vnd.pco.b16", "vnd.pco.b16", Image, &["b16"]),
    KnownType::new("image/vnd.radiance", "vnd.radiance", Image, &["hdr", "rgbe", "xyze"]),
    KnownType::new("image/vnd.sealed.png", "vnd.sealed.png", Image, &["spng", "spn", "s1n"]),
    KnownType::new("image/vnd.sealedmedia.softseal.gif", "vnd.sealedmedia.softseal.gif", Image, &["sgif", "sgi", "s1g"]),
    KnownType::new("image/vnd.sealedmedia.softseal.jpg", "vnd.sealedmedia.softseal.jpg", Image, &["sjpg", "sjp", "s1j"]),
    KnownType::new("image/vnd.svf", "vnd.svf", Image, &[]),
    KnownType::new("image/vnd.tencent.tap", "vnd.tencent.tap", Image, &["tap"]),
    KnownType::new("image/vnd.valve.source.texture", "vnd.valve.source.texture", Image, &["vtf"]),
    KnownType::new("image/vnd.wap.wbmp", "vnd.wap.wbmp", Image, &["wbmp"]),
    KnownType::new("image/vnd.xiff", "vnd.xiff", Image, &["xif"]),
    KnownType::new("image/vnd.zbrush.pcx", "vnd.zbrush.pcx", Image, &["pcx"]),
    KnownType::new("image/webp", "webp", Image, &["webp"]),
    KnownType::new("image/wmf", "wmf", Image, &["wmf"]),
    KnownType::new("message/bhttp", "bhttp", Message, &[]),
    KnownType::new("message/cpim", "CPIM", Message, &[]),
    KnownType::new("message/delivery-status", "delivery-status", Message, &[]),
    KnownType::new("message/disposition-notification", "disposition-notification", Message, &[]),
    KnownType::new("message/example", "example", Message, &[]),
    KnownType::new("message/external-body", "external-body", Message, &[]),
    KnownType::new("message/feedback-report", "feedback-report", Message, &[]),
    KnownType::new("message/global", "global", Message, &["u8msg"]),
    KnownType::new("message/global-delivery-status", "global-delivery-status", Message, &["u8dsn"]),
    KnownType::new("message/global-disposition-notification", "global-disposition-notification", Message, &["u8mdn"]),
    KnownType::new("message/global-headers", "global-headers", Message, &["u8hdr"]),
    KnownType::new("message/http", "http", Message, &[]),
    KnownType::new("message/imdn+xml", "imdn+xml", Message, &[]),
    KnownType::new("message/partial", "partial", Message, &[]),
    KnownType::new("message/rfc822", "rfc822", Message, &["eml", "mail", "art"]),
    KnownType::new("message/s-http", "s-http", Message, &[]),
    KnownType::new("message/sip", "sip", Message, &[]),
    KnownType::new("message/sipfrag", "sipfrag", Message, &[]),
    KnownType::new("message/tracking-status", "tracking-status", Message, &[]),
    KnownType::new("message/vnd.wfa.wsc", "vnd.wfa.wsc", Message, &[]),
    KnownType::new("model/3mf", "3mf", Model, &[]),
    KnownType::new("model/e57", "e57", Model, &[]),
    KnownType::new("model/example", "example", Model, &[]),
    KnownType::new("model/gltf+json", "gltf+json", Model, &["gltf"]),
    KnownType::new("model/gltf-binary", "gltf-binary", Model, &["glb"]),
    KnownType::new("model/iges", "iges", Model, &["igs", "iges"]),
    KnownType::new("model/jt", "JT", Model, &["jt"]),
    KnownType::new("model/mesh", "mesh", Model, &["msh", "mesh", "silo"]),
    KnownType::new("model/mtl", "mtl", Model, &["mtl"]),
    KnownType::new("model/obj", "obj", Model, &["obj"]),
    KnownType::new("model/prc", "prc", Model, &["prc"]),
    KnownType::new("model/step", "step", Model, &["stp", "step"]),
    KnownType::new("model/step+xml", "step+xml", Model, &["stpx"]),
    KnownType::new("model/step+zip", "step+zip", Model, &["stpz"]),
    KnownType::new("model/step-xml+zip", "step-xml+zip", Model, &["stpxz"]),
    KnownType::new("model/stl", "stl", Model, &["stl"]),
    KnownType::new("model/u3d", "u3d", Model, &["u3d"]),
    KnownType::new("model/vnd.cld", "vnd.cld", Model, &["cld"]),
    KnownType::new("model/vnd.collada+xml", "vnd.collada+xml", Model, &["dae"]),
    KnownType::new("model/vnd.dwf", "vnd.dwf", Model, &["dwf"]),
    KnownType::new("model/vnd.flatland.3dml", "vnd.flatland.3dml", Model, &[]),
    KnownType::new("model/vnd.gdl", "vnd.gdl", Model, &["gdl", "gsm", "win", "dor", "lmp", "rsm", "msm", "ism"]),
    KnownType::new("model/vnd.gs-gdl", "vnd.gs-gdl", Model, &[]),
    KnownType::new("model/vnd.gtw", "vnd.gtw", Model, &["gtw"]),
    KnownType::new("model/vnd.moml+xml", "vnd.moml+xml", Model, &["moml"]),
    KnownType::new("model/vnd.mts", "vnd.mts", Model, &["mts"]),
    KnownType::new("model/vnd.opengex", "vnd.opengex", Model, &["ogex"]),
    KnownType::new("model/vnd.parasolid.transmit.binary", "vnd.parasolid.transmit.binary", Model, &["x_b", "xmt_bin"]),
    KnownType::new("model/vnd.parasolid.transmit.text", "vnd.parasolid.transmit.text", Model, &["x_t", "xmt_txt"]),
    KnownType::new("model/vnd.pytha.pyox", "vnd.pytha.pyox", Model, &["pyox"]),
    KnownType::new("model/vnd.rosette.annotated-data-model", "vnd.rosette.annotated-data-model", Model, &[]),
    KnownType::new("model/vnd.sap.vds", "vnd.sap.vds", Model, &["vds"]),
    KnownType::new("model/vnd.usda", "vnd.usda", Model, &["usda"]),
    KnownType::new("model/vnd.usdz+zip", "vnd.usdz+zip", Model, &["usdz"]),
    KnownType::new("model/vnd.valve.source.compiled-map", "vnd.valve.source.compiled-map", Model, &["bsp"]),
    KnownType::new("model/vnd.vtu", "vnd.vtu", Model, &["vtu"]),
    KnownType::new("model/vrml", "vrml", Model, &["wrl", "vrm", "vrml"]),
    KnownType::new("model/x3d+fastinfoset", "x3d+fastinfoset", Model, &["x3db"]),
    KnownType::new("model/x3d+xml", "x3d+xml", Model, &["x3d", "x3dz"]),
    KnownType::new("model/x3d-vrml", "x3d-vrml", Model, &["x3dv", "x3dvz"]),
    KnownType::new("multipart/alternative", "alternative", Multipart, &[]),
    KnownType::new("multipart/appledouble", "appledouble", Multipart, &[]),
    KnownType::new("multipart/byteranges", "byteranges", Multipart, &[]),
    KnownType::new("multipart/digest", "digest", Multipart, &[]),
    KnownType::new("multipart/encrypted", "encrypted", Multipart, &[]),
    KnownType::new("multipart/example", "example", Multipart, &[]),
    KnownType::new("multipart/form-data", "form-data", Multipart, &[]),
    KnownType::new("multipart/header-set", "header-set", Multipart, &[]),
    KnownType::new("multipart/mixed", "mixed", Multipart, &[]),
    KnownType::new("multipart/multilingual", "multilingual", Multipart, &[]),
    KnownType::new("multipart/parallel", "parallel", Multipart, &[]),
    KnownType::new("multipart/related", "related", Multipart, &[]),
    KnownType::new("multipart/report", "report", Multipart, &[]),
    KnownType::new("multipart/signed", "signed", Multipart, &[]),
    KnownType::new("multipart/vnd.bint.med-plus", "vnd.bint.med-plus", Multipart, &["bmed"]),
    KnownType::new("multipart/voice-message", "voice-message", Multipart, &["vpm"]),
    KnownType::new("text/1d-interleaved-parityfec", "1d-interleaved-parityfec", Text, &[]),
    KnownType::new("text/cache-manifest", "cache-manifest", Text, &["appcache", "manifest"]),
    KnownType::new("text/calendar", "calendar", Text, &["ics", "ifb"]),
    KnownType::new("text/cql", "cql", Text, &["cql"]),
    KnownType::new("text/cql-extension", "cql-extension", Text, &[]),
    KnownType::new("text/cql-identifier", "cql-identifier", Text, &[]),
    KnownType::new("text/css", "css", Text, &["css"]),
    KnownType::new("text/csv", "csv", Text, &["csv"]),
    KnownType::new("text/csv-schema", "csv-schema", Text, &["csvs"]),
    KnownType::new("text/dns", "dns", Text, &["soa", "zone"]),
    KnownType::new("text/encaprtp", "encaprtp", Text, &[]),
    KnownType::new("text/enriched", "enriched", Text, &[]),
    KnownType::new("text/example", "example", Text, &[]),
    KnownType::new("text/fhirpath", "fhirpath", Text, &[]),
    KnownType::new("text/flexfec", "flexfec", Text, &[]),
    KnownType::new("text/fwdred", "fwdred", Text, &[]),
    KnownType::new("text/gff3", "gff3", Text, &["gff3"]),
    KnownType::new("text/grammar-ref-list", "grammar-ref-list", Text, &[]),
    KnownType::new("text/hl7v2", "hl7v2", Text, &[]),
    KnownType::new("text/html", "html", Text, &["html", "htm", "shtml"]),
    KnownType::new("text/javascript", "javascript", Text, &["es", "js", "mjs"]),
    KnownType::new("text/jcr-cnd", "jcr-cnd", Text, &["cnd"]),
    KnownType::new("text/markdown", "markdown", Text, &["md", "markdown"]),
    KnownType::new("text/mizar", "mizar", Text, &["miz"]),
    KnownType::new("text/n3", "n3", Text, &["n3"]),
    KnownType::new("text/parameters", "parameters", Text, &[]),
    KnownType::new("text/parityfec", "parityfec", Text, &[]),
    KnownType::new("text/plain", "plain", Text, &["txt", "text", "pot", "brf", "srt"]),
    KnownType::new("text/provenance-notation", "provenance-notation", Text, &["provn"]),
    KnownType::new("text/prs.fallenstein.rst", "prs.fallenstein.rst", Text, &["rst"]),
    KnownType::new("text/prs.lines.tag", "prs.lines.tag", Text, &["tag", "dsc"]),
    KnownType::new("text/prs.prop.logic", "prs.prop.logic", Text, &[]),
    KnownType::new("text/raptorfec", "raptorfec", Text, &[]),
    KnownType::new("text/red", "RED", Text, &[]),
    KnownType::new("text/rfc822-headers", "rfc822-headers", Text, &[]),
    KnownType::new("text/rtf", "rtf", Text, &[]),
    KnownType::new("text/rtp-enc-aescm128", "rtp-enc-aescm128", Text, &[]),
    KnownType::new("text/rtploopback", "rtploopback", Text, &[]),
    KnownType::new("text/rtx", "rtx", Text, &[]),
    KnownType::new("text/sgml", "SGML", Text, &["sgml", "sgm"]),
    KnownType::new("text/shaclc", "shaclc", Text, &["shaclc", "shc"]),
    KnownType::new("text/shex", "shex", Text, &["shex"]),
    KnownType::new("text/spdx", "spdx", Text, &["spdx"]),
    KnownType::new("text/strings", "strings", Text, &[]),
    KnownType::new("text/t140", "t140", Text, &[]),
    KnownType::new("text/tab-separated-values", "tab-separated-values", Text, &["tsv"]),
    KnownType::new("text/texmacs", "texmacs", Text, &["tm"]),
    KnownType::new("text/troff", "troff", Text, &["t", "tr", "roff"]),
    KnownType::new("text/turtle", "turtle", Text, &["ttl"]),
    KnownType::new("text/ulpfec", "ulpfec", Text, &[]),
    KnownType::new("text/uri-list", "uri-list", Text, &["uris", "uri"]),
    KnownType::new("text/vcard", "vcard", Text, &["vcf", "vcard"]),
    KnownType::new("text/vnd.a", "vnd.a", Text, &["a"]),
    KnownType::new("text/vnd.abc", "vnd.abc", Text, &["abc"]),
    KnownType::new("text/vnd.ascii-art", "vnd.ascii-art", Text, &["ascii"]),
    KnownType::new("text/vnd.curl", "vnd.curl", Text, &["curl"]),
    KnownType::new("text/vnd.debian.copyright", "vnd.debian.copyright", Text, &["copyright"]),
    KnownType::new("text/vnd.dmclientscript", "vnd.DMClientScript", Text, &["dms"]),
    KnownType::new("text/vnd.dvb.subtitle", "vnd.dvb.subtitle", Text, &[]),
    KnownType::new("text/vnd.esmertec.theme-descriptor", "vnd.esmertec.theme-descriptor", Text, &["jtd"]),
    KnownType::new("text/vnd.exchangeable", "vnd.exchangeable", Text, &["vfk"]),
    KnownType::new("text/vnd.familysearch.gedcom", "vnd.familysearch.gedcom", Text, &["ged"]),
    KnownType::new("text/vnd.ficlab.flt", "vnd.ficlab.flt", Text, &["flt"]),
    KnownType::new("text/vnd.fly", "vnd.fly", Text, &["fly"]),
    KnownType::new("text/vnd.fmi.flexstor", "vnd.fmi.flexstor", Text, &["flx"]),
    KnownType::new("text/vnd.gml", "vnd.gml", Text, &[]),
    KnownType::new("text/vnd.graphviz", "vnd.graphviz", Text, &["gv", "dot"]),
    KnownType::new("text/vnd.hans", "vnd.hans", Text, &["hans"]),
    KnownType::new("text/vnd.hgl", "vnd.hgl", Text, &["hgl"]),
    KnownType::new("text/vnd.in3d.3dml", "vnd.in3d.3dml", Text, &["3dml", "3dm"]),
    KnownType::new("text/vnd.in3d.spot", "vnd.in3d.spot", Text, &["spot", "spo"]),
    KnownType::new("text/vnd.iptc.newsml", "vnd.IPTC.NewsML", Text, &[]),
    KnownType::new("text/vnd.iptc.nitf", "vnd.IPTC.NITF", Text, &[]),
    KnownType::new("text/vnd.latex-z", "vnd.latex-z", Text, &[]),
    KnownType::new("text/vnd.motorola.reflex", "vnd.motorola.reflex", Text, &[]),
    KnownType::new("text/vnd.ms-mediapackage", "vnd.ms-mediapackage", Text, &["mpf"]),
    KnownType::new("text/vnd.net2phone.commcenter.command", "vnd.net2phone.commcenter.command", Text, &["ccc"]),
    KnownType::new("text/vnd.radisys.msml-basic-layout", "vnd.radisys.msml-basic-layout", Text, &[]),
    KnownType::new("text/vnd.senx.warpscript", "vnd.senx.warpscript", Text, &["mc2"]),
    KnownType::new("text/vnd.sosi", "vnd.sosi", Text, &["sos"]),
    KnownType::new("text/vnd.sun.j2me.app-descriptor", "vnd.sun.j2me.app-descriptor", Text, &["jad"]),
    KnownType::new("text/vnd.trolltech.linguist", "vnd.trolltech.linguist", Text, &["ts"]),
    KnownType::new("text/vnd.wap.si", "vnd.wap.si", Text, &["si"]),
    KnownType::new("text/vnd.wap.sl", "vnd.wap.sl", Text, &["sl"]),
    KnownType::new("text/vnd.wap.wml", "vnd.wap.wml", Text, &["wml"]),
    KnownType::new("text/vnd.wap.wmlscript", "vnd.wap.wmlscript", Text, &["wmls"]),
    KnownType::new("text/vtt", "vtt", Text, &["vtt"]),
    KnownType::new("text/wgsl", "wgsl", Text, &["wgsl"]),
    KnownType::new("text/xml", "xml", Text, &[]),
    KnownType::new("text/xml-dtd", "xml-dtd", Text, &[]),
    KnownType::new("text/xml-external-parsed-entity", "xml-external-parsed-entity", Text, &[]),
    KnownType::new("video/1d-interleaved-parityfec", "1d-interleaved-parityfec", Video, &[]),
    KnownType::new("video/3gpp", "3gpp", Video, &[]),
    KnownType::new("video/3gpp-tt", "3gpp-tt", Video, &[]),
    KnownType::new("video/3gpp2", "3gpp2", Video, &[]),
    KnownType::new("video/annodex", "annodex", Video, &["axv"]),
    KnownType::new("video/av1", "AV1", Video, &[]),
    KnownType::new("video/bmpeg", "BMPEG", Video, &[]),
    KnownType::new("video/bt656", "BT656", Video, &[]),
    KnownType::new("video/celb", "CelB", Video, &[]),
    KnownType::new("video/dv", "DV", Video, &[]),
    KnownType::new("video/encaprtp", "encaprtp", Video, &[]),
    KnownType::new("video/example", "example", Video, &[]),
    KnownType::new("video/ffv1", "FFV1", Video, &[]),
    KnownType::new("video/flexfec", "flexfec", Video, &[]),
    KnownType::new("video/fli", "fli", Video, &["fli"]),
    KnownType::new("video/gl", "gl", Video, &["gl"]),
    KnownType::new("video/h261", "H261", Video, &[]),
    KnownType::new("video/h263", "H263", Video, &[]),
    KnownType::new("video/h263-1998", "H263-1998", Video, &[]),
    KnownType::new("video/h263-2000", "H263-2000", Video, &[]),
    KnownType::new("video/h264", "H264", Video, &[]),
    KnownType::new("video/h264-rcdo", "H264-RCDO", Video, &[]),
    KnownType::new("video/h264-svc", "H264-SVC", Video, &[]),
    KnownType::new("video/h265", "H265", Video, &[]),
    KnownType::new("video/h266", "H266", Video, &[]),
    KnownType::new("video/iso.segment", "iso.segment", Video, &["m4s"]),
    KnownType::new("video/jpeg", "JPEG", Video, &[]),
    KnownType::new("video/jpeg2000", "jpeg2000", Video, &[]),
    KnownType::new("video/jxsv", "jxsv", Video, &[]),
    KnownType::new("video/mj2", "mj2", Video, &["mj2", "mjp2"]),
    KnownType::new("video/mp1s", "MP1S", Video, &[]),
    KnownType::new("video/mp2p", "MP2P", Video, &[]),
    KnownType::new("video/mp2t", "MP2T", Video, &[]),
    KnownType::new("video/mp4", "mp4", Video, &["mp4", "mpg4", "m4v"]),
    KnownType::new("video/mp4v-es", "MP4V-ES", Video, &[]),
    KnownType::new("video/mpeg", "mpeg", Video, &["mpeg", "mpg", "mpe", "m1v", "m2v"]),
    KnownType::new("video/mpeg4-generic", "mpeg4-generic", Video, &[]),
    KnownType::new("video/mpv", "MPV", Video, &[]),
    KnownType::new("video/nv", "nv", Video, &[]),
    KnownType::new("video/ogg", "ogg", Video, &["ogv"]),
    KnownType::new("video/parityfec", "parityfec", Video, &[]),
    KnownType::new("video/pointer", "pointer", Video, &[]),
    KnownType::new("video/quicktime", "quicktime", Video, &["qt", "mov"]),
    KnownType::new("video/raptorfec", "raptorfec", Video, &[]),
    KnownType::new("video/raw", "raw", Video, &[]),
    KnownType::new("video/rtp-enc-aescm128", "rtp-enc-aescm128", Video, &[]),
    KnownType::new("video/rtploopback", "rtploopback", Video, &[]),
    KnownType::new("video/rtx", "rtx", Video, &[]),
    KnownType::new("video/scip", "scip", Video, &[]),
    KnownType::new("video/smpte291", "smpte291", Video, &[]),
    KnownType::new("video/smpte292m", "SMPTE292M", Video, &[]),
    KnownType::new("video/ulpfec", "ulpfec", Video, &[]),
    KnownType::new("video/vc1", "vc1", Video, &[]),
    KnownType::new("video/vc2", "vc2", Video, &[]),
    KnownType::new("video/vnd.cctv", "vnd.CCTV", Video, &[]),
    KnownType::new("video/vnd.dece.hd", "vnd.dece.hd", Video, &["uvh", "uvvh"]),
    KnownType::new("video/vnd.dece.mobile", "vnd.dece.mobile", Video, &["uvm", "uvvm"]),
    KnownType::new("video/vnd.dece.mp4", "vnd.dece.mp4", Video, &["uvu", "uvvu"]),
    KnownType::new("video/vnd.dece.pd", "vnd.dece.pd", Video, &["uvp", "uvvp"]),
    KnownType::new("video/vnd.dece.sd", "vnd.dece.sd", Video, &["uvs", "uvvs"]),
    KnownType::new("video/vnd.dece.video", "vnd.dece.video", Video, &["uvv", "uvvv"]),
    KnownType::new("video/vnd.directv.mpeg", "vnd.directv.mpeg", Video, &[]),
    KnownType::new("video/vnd.directv.mpeg-tts", "vnd.directv.mpeg-tts", Video, &[]),
    KnownType::new("video/vnd.dlna.mpeg-tts", "vnd.dlna.mpeg-tts", Video, &[]),
    KnownType::new("video/vnd.dvb.file", "vnd.dvb.file", Video, &["dvb"]),
    KnownType::new("video/vnd.fvt", "vnd.fvt", Video, &["fvt"]),
    KnownType::new("video/vnd.hns.video", "vnd.hns.video", Video, &[]),
    KnownType::new("video/vnd.iptvforum.1dparityfec-1010", "vnd.iptvforum.1dparityfec-1010", Video, &[]),
    KnownType::new("video/vnd.iptvforum.1dparityfec-2005", "vnd.iptvforum.1dparityfec-2005", Video, &[]),
    KnownType::new("video/vnd.iptvforum.2dparityfec-1010", "vnd.iptvforum.2dparityfec-1010", Video, &[]),
    KnownType::new("video/vnd.iptvforum.2dparityfec-2005", "vnd.iptvforum.2dparityfec-2005", Video, &[]),
    KnownType::new("video/vnd.iptvforum.ttsavc", "vnd.iptvforum.ttsavc", Video, &[]),
    KnownType::new("video/vnd.iptvforum.ttsmpeg2", "vnd.iptvforum.ttsmpeg2", Video, &[]),
    KnownType::new("video/vnd.motorola.video", "vnd.motorola.video", Video, &[]),
    KnownType::new("video/vnd.motorola.videop", "vnd.motorola.videop", Video, &[]),
    KnownType::new("video/vnd.mpegurl", "vnd.mpegurl", Video, &["mxu", "m4u"]),
    KnownType::new("video/vnd.ms-playready.media.pyv", "vnd.ms-playready.media.pyv", Video, &["pyv"]),
    KnownType::new("video/vnd.nokia.interleaved-multimedia", "vnd.nokia.interleaved-multimedia", Video, &["nim"]),
    KnownType::new("video/vnd.nokia.mp4vr", "vnd.nokia.mp4vr", Video, &[]),
    KnownType::new("video/vnd.nokia.videovoip", "vnd.nokia.videovoip", Video, &[]),
    KnownType::new("video/vnd.objectvideo", "vnd.objectvideo", Video, &[]),
    KnownType::new("video/vnd.radgamettools.bink", "vnd.radgamettools.bink", Video, &["bik", "bk2"]),
    KnownType::new("video/vnd.radgamettools.smacker", "vnd.radgamettools.smacker", Video, &["smk"]),
    KnownType::new("video/vnd.sealed.mpeg1", "vnd.sealed.mpeg1", Video, &["smpg", "s11"]),
    KnownType::new("video/vnd.sealed.mpeg4", "vnd.sealed.mpeg4", Video, &["s14"]),
    KnownType::new("video/vnd.sealed.swf", "vnd.sealed.swf", Video, &["sswf", "ssw"]),
    KnownType::new("video/vnd.sealedmedia.softseal.mov", "vnd.sealedmedia.softseal.mov", Video, &["smov", "smo", "s1q"]),
    KnownType::new("video/vnd.uvvu.mp4", "vnd.uvvu.mp4", Video, &[]),
    KnownType::new("video/vnd.vivo", "vnd.vivo", Video, &["viv"]),
    KnownType::new("video/vnd.youtube.yt", "vnd.youtube.yt", Video, &["yt"]),
    KnownType::new("video/vp8", "VP8", Video, &[]),
    KnownType::new("video/vp9", "VP9", Video, &[]),
    KnownType::new("video/webm", "webm", Video, &["webm"]),
];
